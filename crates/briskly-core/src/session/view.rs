impl<'t> PaceSession<'t> {
    /// Lends the current view model to the presentation boundary. Frames
    /// observed across ticks carry non-decreasing progress.
    pub fn with_frame<F>(&self, f: F)
    where
        F: FnOnce(Frame<'_>),
    {
        match &self.active {
            ActiveSchedule::None => f(Frame::Blank {
                state: self.state,
                wpm: self.wpm,
            }),
            ActiveSchedule::Chunk(schedule) => f(Frame::Chunk {
                text: self.staged.as_str(),
                index: schedule.index(),
                chunk_total: schedule.chunk_total(),
                wpm: self.wpm,
                state: self.state,
            }),
            ActiveSchedule::Scroll(schedule) => f(Frame::Scroll {
                offset_px: schedule.position(),
                total_px: schedule.total_distance(),
                wpm: self.wpm,
                state: self.state,
                intro_visible: self.intro_visible,
            }),
        }
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn mode(&self) -> PaceMode {
        self.mode
    }

    pub fn wpm(&self) -> u16 {
        self.wpm
    }

    /// Chunks revealed since the last call. Feeds the host's effective-WPM
    /// reporting.
    pub fn drain_chunk_updates(&mut self) -> u32 {
        let count = self.chunks_since_drain;
        self.chunks_since_drain = 0;
        count
    }
}
