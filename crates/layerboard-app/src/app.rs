//! Driver loop: script commands in, editor updates and persistence out.

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::script::{Command, ExportFormat, LayerMove};
use crate::shortcuts::ShortcutRegistry;
use layerboard_core::export;
use layerboard_core::properties::{self, PropertyField};
use layerboard_core::storage::{AutoSaveManager, Storage};
use layerboard_core::{Editor, EditorEvent};
use std::io::{BufRead, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

const COMMAND_HELP: &str = "\
Commands:
  add rect|text
  down <x> <y> [body <id>|handle <id> <nw|ne|sw|se>|rotate <id>|background]
  move <x> <y>
  up
  key <name> [shift]
  select <id> | clear | delete [id]
  layer up|down|front <id>
  set <field> <value>
  edit <id> | text <content>
  list | props
  export json|html <path>
  save | help
";

/// Counts from one script run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub executed: usize,
    /// Lines that did not parse.
    pub skipped: usize,
    /// Commands that parsed but failed.
    pub failed: usize,
}

/// The application: an editor wired to an autosaving storage backend.
pub struct App<S: Storage> {
    config: AppConfig,
    editor: Editor,
    autosave: AutoSaveManager<S>,
}

impl<S: Storage> App<S> {
    pub fn new(config: AppConfig, storage: Arc<S>) -> Self {
        let mut autosave = AutoSaveManager::new(storage);
        autosave.set_key(config.autosave_key.clone());
        autosave.set_interval(Duration::from_secs(config.autosave_interval_secs));
        Self {
            editor: Editor::new(config.frame()),
            config,
            autosave,
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Load the saved layout into the editor. Returns true if one was found.
    pub fn restore(&mut self) -> AppResult<bool> {
        match pollster::block_on(self.autosave.load_last())? {
            Some(snapshot) => {
                self.editor.restore(snapshot);
                self.editor.drain_events();
                Ok(true)
            }
            None => {
                log::info!("No saved layout under '{}'", self.autosave.key());
                Ok(false)
            }
        }
    }

    /// Run every line of `input`. Bad lines and failed commands are logged
    /// and skipped. Pending changes are saved at the end.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> AppResult<RunSummary> {
        let mut summary = RunSummary::default();
        for (index, line) in input.lines().enumerate() {
            let line = line?;
            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    log::warn!("line {}: {}", index + 1, e);
                    summary.skipped += 1;
                    continue;
                }
            };
            match self.execute(command, out) {
                Ok(()) => summary.executed += 1,
                Err(e) => {
                    log::error!("line {}: {}", index + 1, e);
                    summary.failed += 1;
                }
            }
        }
        self.flush()?;
        Ok(summary)
    }

    /// Execute one command and process the resulting editor events.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> AppResult<()> {
        let result = self.dispatch(command, out);
        self.after_input();
        result
    }

    fn dispatch<W: Write>(&mut self, command: Command, out: &mut W) -> AppResult<()> {
        let editor = &mut self.editor;
        match command {
            Command::Add(kind) => {
                let id = editor.add_element(kind);
                writeln!(out, "added {} {}", kind, id)?;
            }
            Command::Down(point, target) => {
                let target = editor.pointer_down(point, target);
                log::debug!("Press at {:?} on {:?}", point, target);
            }
            Command::Move(point) => {
                editor.pointer_move(point);
            }
            Command::Up => {
                editor.pointer_up();
            }
            Command::Key { key, shift } => {
                if !editor.handle_key(&key, shift) {
                    log::debug!("Key {:?} had no effect", key);
                }
            }
            Command::Select(id) => {
                if !editor.select(id) {
                    log::warn!("No element {}", id);
                }
            }
            Command::Clear => editor.clear_selection(),
            Command::Delete(id) => {
                let deleted = match id {
                    Some(id) => editor.delete(id),
                    None => editor.delete_selected(),
                };
                if !deleted {
                    log::warn!("Nothing to delete");
                }
            }
            Command::Layer(direction, id) => {
                let moved = match direction {
                    LayerMove::Up => editor.move_layer_up(id),
                    LayerMove::Down => editor.move_layer_down(id),
                    LayerMove::Front => editor.bring_to_front(id),
                };
                if !moved {
                    log::debug!("Layer {:?} left element {} where it was", direction, id);
                }
            }
            Command::Set(field, value) => {
                if !editor.edit_property(field, &value) {
                    log::debug!("Ignored {} edit", field);
                }
            }
            Command::Edit(id) => {
                if !editor.begin_text_edit(id) {
                    log::warn!("Element {} is not a text element", id);
                }
            }
            Command::Text(text) => {
                if !editor.commit_text(&text) {
                    log::warn!("Not editing any text");
                }
            }
            Command::List => self.write_layers(out)?,
            Command::Props => self.write_properties(out)?,
            Command::Export(format, path) => self.export(format, &path)?,
            Command::Save => {
                pollster::block_on(self.autosave.save(&self.editor.snapshot()))?;
                writeln!(out, "saved")?;
            }
            Command::Help => {
                write!(out, "{}{}", COMMAND_HELP, ShortcutRegistry::help_text())?;
            }
        }
        Ok(())
    }

    fn after_input(&mut self) {
        for event in self.editor.drain_events() {
            match event {
                EditorEvent::SaveRequested => self.autosave.mark_dirty(),
                other => log::trace!("{:?}", other),
            }
        }

        if self.editor.take_properties_dirty() {
            if let Some(element) = self.editor.selected_element() {
                log::debug!(
                    "Properties: {} {} at ({}, {}) {}x{} rot {}",
                    element.kind(),
                    element.id(),
                    element.x,
                    element.y,
                    element.width,
                    element.height,
                    element.rotation
                );
            }
        }

        if !self.autosave.should_save() {
            return;
        }
        if let Err(e) = pollster::block_on(self.autosave.save(&self.editor.snapshot())) {
            log::error!("Autosave failed: {}", e);
        }
    }

    /// Save now if anything is unsaved.
    pub fn flush(&mut self) -> AppResult<()> {
        if self.autosave.is_dirty() {
            pollster::block_on(self.autosave.save(&self.editor.snapshot()))?;
            log::info!("Saved layout under '{}'", self.autosave.key());
        }
        Ok(())
    }

    fn write_layers<W: Write>(&self, out: &mut W) -> AppResult<()> {
        let selected = self.editor.selected();
        for element in self.editor.layers() {
            let marker = if selected == Some(element.id()) { '*' } else { ' ' };
            writeln!(
                out,
                "{} {:>3} {:<9} z={} x={} y={} w={} h={} rot={}",
                marker,
                element.id(),
                element.kind(),
                element.z_index,
                element.x,
                element.y,
                element.width,
                element.height,
                element.rotation
            )?;
        }
        Ok(())
    }

    fn write_properties<W: Write>(&self, out: &mut W) -> AppResult<()> {
        let Some(element) = self.editor.selected_element() else {
            writeln!(out, "no selection")?;
            return Ok(());
        };
        for field in PropertyField::ALL {
            if field.applies_to(element.kind()) {
                writeln!(out, "{}: {}", field, properties::property_value(element, field))?;
            }
        }
        if element.is_text() {
            writeln!(out, "text: {}", element.text)?;
        }
        Ok(())
    }

    fn export(&self, format: ExportFormat, path: &Path) -> AppResult<()> {
        let canvas = self.editor.frame().size;
        let elements = self.editor.store().iter();
        let contents = match format {
            ExportFormat::Json => export::export_json(elements, canvas)?,
            ExportFormat::Html => export::export_html(elements, canvas),
        };
        std::fs::write(path, contents)?;
        log::info!("Exported {:?} to {}", format, path.display());
        Ok(())
    }
}
