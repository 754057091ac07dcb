//! Persisted canvas state.

use crate::element::{Element, ElementId};
use serde::{Deserialize, Serialize};

/// All elements plus both counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Elements in store order.
    pub elements: Vec<Element>,
    /// Next z-index to hand out.
    pub z_index_counter: i64,
    /// Last element id handed out.
    pub elem_id_counter: ElementId,
}

impl Snapshot {
    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementKind;

    #[test]
    fn test_counter_field_names() {
        let snapshot = Snapshot {
            elements: vec![Element::new(1, ElementKind::Rectangle, 0, 1)],
            z_index_counter: 2,
            elem_id_counter: 1,
        };
        let json: serde_json::Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(json["zIndexCounter"], 2);
        assert_eq!(json["elemIdCounter"], 1);
        assert_eq!(json["elements"][0]["type"], "rectangle");
    }

    #[test]
    fn test_missing_optional_element_fields() {
        let json = r#"{
            "elements": [{
                "id": 4, "type": "rectangle", "x": 10, "y": 20,
                "width": 50, "height": 60, "zIndex": 9,
                "styles": {"backgroundColor": "red", "color": "black", "borderRadius": 0, "fontSize": 16}
            }],
            "zIndexCounter": 10,
            "elemIdCounter": 4
        }"#;
        let snapshot = Snapshot::from_json(json).unwrap();
        let el = &snapshot.elements[0];
        assert_eq!(el.id(), 4);
        assert!(el.text.is_empty());
        assert!(el.rotation.abs() < f64::EPSILON);
    }

    #[test]
    fn test_garbage_is_error() {
        assert!(Snapshot::from_json("{not json").is_err());
    }
}
