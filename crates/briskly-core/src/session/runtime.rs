/// What the active schedule produced for one tick.
enum ScheduleEvent {
    None,
    Revealed { index: u32 },
    Moved,
    Finished,
}

impl<'t> PaceSession<'t> {
    /// Advances the session at `now_ms`. The host calls this from its tick
    /// loop; all progress mutation happens here, so cancellation (`pause`,
    /// `reset`) is synchronous: once they return, no further tick can
    /// advance progress.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        let mut render = false;

        // The intro overlay runs on its own one-shot deadline and is not
        // suspended by pause.
        if let Some(deadline) = self.intro_until_ms
            && now_ms >= deadline
        {
            self.intro_until_ms = None;
            self.intro_visible = false;
            render = true;
        }

        if self.state == PlayState::Running {
            match self.advance_schedule(now_ms) {
                ScheduleEvent::None => {}
                ScheduleEvent::Revealed { index } => {
                    self.stage_chunk(index);
                    self.chunks_since_drain = self.chunks_since_drain.saturating_add(1);
                    render = true;
                }
                ScheduleEvent::Moved => render = true,
                ScheduleEvent::Finished => {
                    self.state = PlayState::Completed;
                    render = true;
                    info!("session completed at {}ms", now_ms);
                }
            }
        }

        if self.pending_redraw {
            self.pending_redraw = false;
            render = true;
        }

        if render {
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    fn advance_schedule(&mut self, now_ms: u64) -> ScheduleEvent {
        match &mut self.active {
            ActiveSchedule::None => ScheduleEvent::None,
            ActiveSchedule::Chunk(schedule) => match schedule.tick(now_ms) {
                ChunkTick::Idle => ScheduleEvent::None,
                ChunkTick::Advanced { index } => ScheduleEvent::Revealed { index },
                ChunkTick::Finished => ScheduleEvent::Finished,
            },
            ActiveSchedule::Scroll(schedule) => match schedule.tick(now_ms) {
                ScrollTick::Idle => ScheduleEvent::None,
                ScrollTick::Moved => ScheduleEvent::Moved,
                ScrollTick::Finished => ScheduleEvent::Finished,
            },
        }
    }

    fn stage_chunk(&mut self, index: u32) {
        let Some(text) = self.text else {
            return;
        };

        match chunk_text_at(text, index, self.config.chunk_size) {
            Some(chunk) => self.staged = chunk,
            None => self.staged.clear(),
        }
    }
}
