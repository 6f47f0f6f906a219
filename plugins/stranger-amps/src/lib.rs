//! Stranger Amps plugin.
//!
//! An amp simulator skeleton: the audio path is a stereo pass-through and
//! the controls live in a hosted web app. The editor keeps the app and the
//! parameter store in sync in both directions.

use std::sync::Arc;

use ampview::prelude::*;

mod parameters;

pub use parameters::{amp_parameters, IR_NAMES};

// =============================================================================
// Configuration
// =============================================================================

/// Where the web UI is deployed.
pub const UI_URL: &str = "https://stranger-amps-2.vercel.app";

const EDITOR_WIDTH: u32 = 1200;
const EDITOR_HEIGHT: u32 = 800;

/// Plugin metadata.
pub static CONFIG: Config = Config::new("Stranger Amps", Category::Effect)
    .with_vendor("Stranger Amps")
    .with_version(env!("CARGO_PKG_VERSION"))
    .with_subcategories(&[Subcategory::Distortion, Subcategory::Guitar])
    .with_editor_size(EDITOR_WIDTH, EDITOR_HEIGHT);

/// Editor configuration: the hosted UI at a fixed size, synced at 10 Hz.
pub const EDITOR: EditorConfig = EditorConfig::new(WebViewSource::Url(UI_URL))
    .with_size(EDITOR_WIDTH, EDITOR_HEIGHT);

// =============================================================================
// Plugin
// =============================================================================

/// One plugin instance: the shared parameter store plus factories for the
/// audio and UI halves.
#[derive(Debug, Clone)]
pub struct StrangerAmps {
    parameters: Arc<ParameterStore>,
}

impl StrangerAmps {
    /// Create an instance with every parameter at its default.
    pub fn new() -> Result<Self, ParameterError> {
        let parameters = Arc::new(amp_parameters()?);
        log::debug!("{} created with {} parameters", CONFIG.name, parameters.count());
        Ok(Self { parameters })
    }

    /// The parameter store shared by the processor and the editor.
    pub fn parameters(&self) -> &Arc<ParameterStore> {
        &self.parameters
    }

    /// Create the audio processor.
    pub fn processor(&self) -> StrangerAmpsProcessor {
        StrangerAmpsProcessor {
            parameters: Arc::clone(&self.parameters),
            context: ProcessContext::default(),
        }
    }

    /// Create the editor. The host attaches a surface with
    /// [`WebViewEditor::open`].
    pub fn editor(&self) -> Result<WebViewEditor, WebViewError> {
        WebViewEditor::new(Arc::clone(&self.parameters), EDITOR)
    }
}

// =============================================================================
// Processor
// =============================================================================

/// Stereo pass-through.
///
/// Holds the parameter store so a DSP stage can read it lock-free from the
/// audio thread.
#[derive(Debug)]
pub struct StrangerAmpsProcessor {
    parameters: Arc<ParameterStore>,
    context: ProcessContext,
}

impl StrangerAmpsProcessor {
    /// The parameter store.
    pub fn parameters(&self) -> &ParameterStore {
        &self.parameters
    }

    /// The context from the last `prepare`.
    pub fn context(&self) -> ProcessContext {
        self.context
    }
}

impl Processor for StrangerAmpsProcessor {
    fn prepare(&mut self, context: ProcessContext) {
        log::debug!(
            "prepare: {} Hz, max block {}",
            context.sample_rate,
            context.max_block_size
        );
        self.context = context;
    }

    fn process(&mut self, buffer: &mut StereoBuffer<'_, '_>) {
        buffer.copy_through();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use ampview::webview::RecordingSurface;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Edits(Mutex<Vec<String>>);

    impl AutomationListener for Edits {
        fn begin_edit(&self, id: &str) {
            self.0.lock().push(format!("begin {id}"));
        }

        fn perform_edit(&self, id: &str, normalized: ParameterValue) {
            self.0.lock().push(format!("perform {id} {normalized}"));
        }

        fn end_edit(&self, id: &str) {
            self.0.lock().push(format!("end {id}"));
        }
    }

    fn open_editor(plugin: &StrangerAmps) -> (WebViewEditor, RecordingSurface) {
        let mut editor = plugin.editor().unwrap();
        let surface = RecordingSurface::new();
        editor.open(Box::new(surface.clone())).unwrap();
        editor.sender().page_loaded();
        editor.pump();
        (editor, surface)
    }

    #[test]
    fn test_config() {
        assert_eq!(CONFIG.subcategory_string(), "Distortion|Guitar");
        assert!(CONFIG.has_editor);
        assert_eq!(EDITOR.size, Size::new(1200, 800));
        assert_eq!(EDITOR.sync_interval, Duration::from_millis(100));
    }

    #[test]
    fn test_set_reads_back_exactly() {
        let plugin = StrangerAmps::new().unwrap();
        let store = plugin.parameters();
        for value in [0.0, 0.001, 3.3, 7.77, 10.0] {
            assert!(store.set("drive", value));
            assert_eq!(store.value("drive"), Some(value));
        }
        store.set("drive", 11.0);
        assert_eq!(store.value("drive"), Some(10.0));
    }

    #[test]
    fn test_editor_opens_hosted_ui() {
        let plugin = StrangerAmps::new().unwrap();
        let (_editor, surface) = open_editor(&plugin);
        let recorded = surface.recorded();
        assert_eq!(
            recorded.loads,
            vec![ampview::webview::Content::Url(UI_URL.into())]
        );
        // Page load pushes all twenty parameters.
        assert_eq!(recorded.scripts.len(), 20);
        assert!(recorded.scripts[0].contains(r#"("inputLevel", 5.000000)"#));
        assert!(recorded.scripts[19].contains(r#"("irBypass", 0.000000)"#));
    }

    #[test]
    fn test_idle_sync_is_silent() {
        let plugin = StrangerAmps::new().unwrap();
        let (mut editor, surface) = open_editor(&plugin);
        surface.take_scripts();
        assert_eq!(editor.sync_now(), 0);
        assert_eq!(editor.sync_now(), 0);
        assert!(surface.scripts().is_empty());
    }

    #[test]
    fn test_only_changed_parameter_is_sent() {
        let plugin = StrangerAmps::new().unwrap();
        let (mut editor, surface) = open_editor(&plugin);
        surface.take_scripts();

        plugin.parameters().set("treble", 6.5);
        plugin.parameters().set("presence", 5.0004);
        assert_eq!(editor.sync_now(), 1);
        let scripts = surface.scripts();
        assert_eq!(scripts.len(), 1);
        assert!(scripts[0].contains(r#"("treble", 6.500000)"#));
    }

    #[test]
    fn test_ui_edit_reaches_host() {
        let plugin = StrangerAmps::new().unwrap();
        let edits = Arc::new(Edits::default());
        plugin.parameters().set_listener(edits.clone());
        let (mut editor, _surface) = open_editor(&plugin);

        editor
            .sender()
            .post(r#"{"type":"parameterChange","paramId":"bass","value":7.5}"#);
        editor.pump();

        assert_eq!(plugin.parameters().value("bass"), Some(7.5));
        assert_eq!(
            *edits.0.lock(),
            vec!["begin bass", "perform bass 0.75", "end bass"]
        );
    }

    #[test]
    fn test_bad_ui_messages_change_nothing() {
        let plugin = StrangerAmps::new().unwrap();
        let (mut editor, _surface) = open_editor(&plugin);
        let before: Vec<_> = plugin.parameters().iter().map(|p| p.get()).collect();

        let sender = editor.sender();
        sender.post("not json");
        sender.post(r#"{"type":"unknown"}"#);
        sender.post(r#"{"type":"parameterChange","paramId":"nonexistent","value":3}"#);
        sender.post(r#"{"type":"presetLoad","presetName":"Djent"}"#);
        editor.pump();

        let after: Vec<_> = plugin.parameters().iter().map(|p| p.get()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_preset_reaches_ui() {
        let plugin = StrangerAmps::new().unwrap();
        let (editor, surface) = open_editor(&plugin);
        surface.take_scripts();

        let preset = serde_json::json!({
            "presetName": "Djent",
            "bass": 6.5,
            "irIndex": 0,
        });
        editor.emit_preset(&preset).unwrap();

        let scripts = surface.scripts();
        assert_eq!(scripts.len(), 1);
        assert!(scripts[0].contains(r#"onPresetLoad({"bass":6.5,"irIndex":0,"presetName":"Djent"})"#));
        // Preset data is forwarded, not applied.
        assert_eq!(plugin.parameters().value("bass"), Some(5.0));
    }

    #[test]
    fn test_processor_passes_audio_through() {
        let plugin = StrangerAmps::new().unwrap();
        let mut processor = plugin.processor();
        processor.prepare(ProcessContext {
            sample_rate: 48_000.0,
            max_block_size: 256,
        });
        assert_eq!(processor.context().sample_rate, 48_000.0);

        let left_in = [0.25f32, -0.5, 1.0];
        let right_in = [0.0f32, 0.125, -1.0];
        let mut left_out = [0.0f32; 3];
        let mut right_out = [0.0f32; 3];
        {
            let inputs = [&left_in[..], &right_in[..]];
            let mut outputs = [&mut left_out[..], &mut right_out[..]];
            processor.process(&mut StereoBuffer::new(&inputs, &mut outputs));
        }
        assert_eq!(left_out, left_in);
        assert_eq!(right_out, right_in);
        assert_eq!(processor.tail_seconds(), 0.0);
        processor.release();
    }
}
