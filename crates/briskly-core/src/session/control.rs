impl<'t> PaceSession<'t> {
    pub fn new(mut config: PaceConfig) -> Self {
        config.chunk_size = config.chunk_size.max(1);
        config.frame_budget_ms = config.frame_budget_ms.max(1);

        Self {
            config,
            text: None,
            wpm: 0,
            mode: PaceMode::Chunk,
            total_distance: None,
            state: PlayState::Idle,
            active: ActiveSchedule::None,
            staged: ChunkText::new(),
            intro_until_ms: None,
            intro_visible: false,
            pending_redraw: false,
            chunks_since_drain: 0,
        }
    }

    /// Stores session inputs after validating them. Any in-flight schedule
    /// is cancelled and the session returns to `Idle`; playback starts only
    /// through [`Self::start`].
    pub fn configure(
        &mut self,
        text: &'t str,
        wpm: u16,
        mode: PaceMode,
    ) -> Result<(), ConfigError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyText);
        }
        if wpm == 0 {
            return Err(ConfigError::ZeroRate);
        }

        self.text = Some(trimmed);
        self.wpm = wpm;
        self.mode = mode;
        // A new text invalidates any previously measured layout.
        self.total_distance = None;
        self.clear_schedule();
        debug!("configured mode={:?} wpm={} bytes={}", mode, wpm, trimmed.len());
        Ok(())
    }

    /// Records the scrollable distance measured by the presentation side
    /// once the full text block is laid out. The engine treats it as an
    /// opaque scalar; unusable values are ignored.
    pub fn set_total_distance(&mut self, distance_px: f32) {
        if !distance_px.is_finite() || distance_px <= 0.0 {
            debug!("ignoring unusable scroll distance {}", distance_px);
            return;
        }
        self.total_distance = Some(distance_px);
    }

    /// `Idle -> Running` derives and arms a schedule; `Paused -> Running`
    /// resumes the armed one. Starting while `Running` or `Completed` is a
    /// no-op.
    pub fn start(&mut self, now_ms: u64) -> Result<(), StartError> {
        match self.state {
            PlayState::Running => {
                debug!("start ignored: already running");
                Ok(())
            }
            PlayState::Completed => {
                debug!("start ignored: completed session needs reset");
                Ok(())
            }
            PlayState::Paused => {
                match &mut self.active {
                    ActiveSchedule::Chunk(schedule) => schedule.resume(now_ms),
                    ActiveSchedule::Scroll(schedule) => schedule.resume(now_ms),
                    ActiveSchedule::None => {}
                }
                self.state = PlayState::Running;
                self.pending_redraw = true;
                debug!("resumed at {}ms", now_ms);
                Ok(())
            }
            PlayState::Idle => self.start_from_idle(now_ms),
        }
    }

    fn start_from_idle(&mut self, now_ms: u64) -> Result<(), StartError> {
        let text = self.text.ok_or(StartError::NotConfigured)?;
        let word_count = count_words(text);

        match self.mode {
            PaceMode::Chunk => {
                let total = chunk_count(word_count, self.config.chunk_size);
                let period_ms = chunk_period_ms(self.wpm, self.config.chunk_size);
                let mut schedule = ChunkSchedule::new(total, period_ms);
                schedule.arm(now_ms);
                self.active = ActiveSchedule::Chunk(schedule);
                // The first chunk shows immediately; the armed period covers
                // the second.
                self.stage_chunk(0);
                self.chunks_since_drain = 1;
                info!(
                    "chunk session started: words={} chunks={} period_ms={}",
                    word_count, total, period_ms
                );
            }
            PaceMode::Scroll => {
                let distance = self.total_distance.ok_or(StartError::LayoutPending)?;
                let duration_ms = reading_duration_ms(word_count, self.wpm);
                let mut schedule =
                    ScrollSchedule::new(distance, duration_ms, self.config.frame_budget_ms);
                schedule.arm(now_ms);
                self.active = ActiveSchedule::Scroll(schedule);
                self.intro_until_ms = Some(now_ms.saturating_add(self.config.intro_overlay_ms));
                self.intro_visible = true;
                info!(
                    "scroll session started: words={} duration_ms={} distance_px={}",
                    word_count, duration_ms, distance
                );
            }
        }

        self.state = PlayState::Running;
        self.pending_redraw = true;
        Ok(())
    }

    /// `Running -> Paused`; the armed deadline is dropped and progress is
    /// preserved exactly. No-op in any other state.
    pub fn pause(&mut self, now_ms: u64) {
        if self.state != PlayState::Running {
            debug!("pause ignored: not running");
            return;
        }

        match &mut self.active {
            ActiveSchedule::Chunk(schedule) => schedule.pause(),
            ActiveSchedule::Scroll(schedule) => schedule.pause(),
            ActiveSchedule::None => {}
        }
        self.state = PlayState::Paused;
        self.pending_redraw = true;
        debug!("paused at {}ms", now_ms);
    }

    /// Cancels any deadline and returns to `Idle` with zero progress.
    /// Configured text, rate, mode and measured layout are retained for the
    /// next start. Safe from any state; idempotent.
    pub fn reset(&mut self) {
        self.clear_schedule();
        debug!("reset to idle");
    }

    fn clear_schedule(&mut self) {
        self.active = ActiveSchedule::None;
        self.state = PlayState::Idle;
        self.staged.clear();
        self.intro_until_ms = None;
        self.intro_visible = false;
        self.chunks_since_drain = 0;
        self.pending_redraw = true;
    }
}
