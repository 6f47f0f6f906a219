//! Audio engine boundary.
//!
//! The engine receives one [`StereoBuffer`] per host block on the audio
//! thread. It may read parameters (lock-free) but never touches the editor.

/// Host-provided processing configuration, fixed between `prepare` calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessContext {
    /// Sample rate in Hz.
    pub sample_rate: f64,
    /// Largest block the host will pass to `process`.
    pub max_block_size: usize,
}

impl Default for ProcessContext {
    fn default() -> Self {
        Self {
            sample_rate: 44100.0,
            max_block_size: 512,
        }
    }
}

/// Main input/output channels for one processing block.
///
/// Input and output channel counts may differ (e.g. a host feeding a mono
/// input into a stereo output). The block length is the shortest channel.
pub struct StereoBuffer<'a, 'b> {
    inputs: &'a [&'b [f32]],
    outputs: &'a mut [&'b mut [f32]],
}

impl<'a, 'b> StereoBuffer<'a, 'b> {
    /// Wrap host channel slices.
    pub fn new(inputs: &'a [&'b [f32]], outputs: &'a mut [&'b mut [f32]]) -> Self {
        Self { inputs, outputs }
    }

    /// Number of input channels.
    pub fn num_input_channels(&self) -> usize {
        self.inputs.len()
    }

    /// Number of output channels.
    pub fn num_output_channels(&self) -> usize {
        self.outputs.len()
    }

    /// Samples in this block.
    pub fn num_samples(&self) -> usize {
        self.inputs
            .iter()
            .map(|c| c.len())
            .chain(self.outputs.iter().map(|c| c.len()))
            .min()
            .unwrap_or(0)
    }

    /// Input channel by index.
    pub fn input(&self, channel: usize) -> Option<&[f32]> {
        self.inputs.get(channel).copied()
    }

    /// Output channel by index.
    pub fn output_mut(&mut self, channel: usize) -> Option<&mut [f32]> {
        self.outputs.get_mut(channel).map(|c| &mut **c)
    }

    /// Copy each input channel to its output and silence outputs that
    /// have no matching input.
    pub fn copy_through(&mut self) {
        let samples = self.num_samples();
        for (index, output) in self.outputs.iter_mut().enumerate() {
            match self.inputs.get(index) {
                Some(input) => output[..samples].copy_from_slice(&input[..samples]),
                None => output[..samples].fill(0.0),
            }
        }
    }
}

/// Audio processing callback.
///
/// `process` runs on the real-time audio thread and must not block or
/// allocate.
pub trait Processor: Send {
    /// Called before processing starts or when the configuration changes.
    fn prepare(&mut self, _context: ProcessContext) {}

    /// Process one block in place.
    fn process(&mut self, buffer: &mut StereoBuffer<'_, '_>);

    /// Called when processing stops. Release anything allocated in `prepare`.
    fn release(&mut self) {}

    /// Tail length in seconds after input goes silent.
    fn tail_seconds(&self) -> f64 {
        0.0
    }
}

/// Identity processor.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassThrough;

impl Processor for PassThrough {
    fn process(&mut self, buffer: &mut StereoBuffer<'_, '_>) {
        buffer.copy_through();
    }
}
