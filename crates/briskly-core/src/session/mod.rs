//! Session controller: owns configuration, play state and the active
//! schedule; mediates between the UI's commands and the schedulers.

use log::{debug, info};

use crate::{
    render::Frame,
    schedule::{
        chunk::{ChunkSchedule, ChunkTick},
        chunk_period_ms, reading_duration_ms,
        scroll::{FRAME_BUDGET_SMOOTH_MS, ScrollSchedule, ScrollTick},
    },
    text_policy::{ChunkText, chunk_count, chunk_text_at, count_words},
};

/// Host-facing tick verdict: whether the presentation must repaint.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

/// Play state of the session. Owned and transitioned exclusively by
/// [`PaceSession`]; schedulers only hold deadlines and progress counters.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlayState {
    Idle,
    Running,
    Paused,
    Completed,
}

/// Presentation granularity.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PaceMode {
    /// Reveal fixed-size word groups at a constant cadence.
    Chunk,
    /// Advance a continuous offset across the rendered text block.
    Scroll,
}

/// Rejected session inputs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// Text trims to nothing.
    EmptyText,
    /// Rate must be a positive words-per-minute count.
    ZeroRate,
}

/// Why a start request could not arm a schedule.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StartError {
    /// No successful `configure` yet.
    NotConfigured,
    /// Scroll mode needs the measured scrollable distance first.
    LayoutPending,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PaceConfig {
    /// Words revealed together in chunk mode.
    pub chunk_size: u16,
    /// Nominal scroll tick period; see
    /// [`FRAME_BUDGET_SMOOTH_MS`](crate::schedule::scroll::FRAME_BUDGET_SMOOTH_MS)
    /// and its coarse sibling.
    pub frame_budget_ms: u32,
    /// How long the scroll-mode "get ready" overlay stays up after start.
    pub intro_overlay_ms: u64,
}

impl Default for PaceConfig {
    fn default() -> Self {
        Self {
            chunk_size: 4,
            frame_budget_ms: FRAME_BUDGET_SMOOTH_MS,
            intro_overlay_ms: 2_500,
        }
    }
}

/// At most one schedule is armed per session; arming a new one replaces the
/// old, so progress can never be advanced twice for the same instant.
enum ActiveSchedule {
    None,
    Chunk(ChunkSchedule),
    Scroll(ScrollSchedule),
}

pub struct PaceSession<'t> {
    config: PaceConfig,
    text: Option<&'t str>,
    wpm: u16,
    mode: PaceMode,
    total_distance: Option<f32>,
    state: PlayState,
    active: ActiveSchedule,
    staged: ChunkText,
    intro_until_ms: Option<u64>,
    intro_visible: bool,
    pending_redraw: bool,
    chunks_since_drain: u32,
}

include!("control.rs");
include!("runtime.rs");
include!("view.rs");
