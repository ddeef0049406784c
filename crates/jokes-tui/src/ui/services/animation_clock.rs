/// Frame counter driving the loading spinner
#[derive(Debug, Default)]
pub struct AnimationClock {
    /// Advances each tick (~100ms)
    frame_counter: u64,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self) {
        self.frame_counter = self.frame_counter.wrapping_add(1);
    }

    pub fn spinner_char(&self) -> char {
        const SPINNERS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
        SPINNERS[self.frame_counter as usize % SPINNERS.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_advances_and_wraps() {
        let mut clock = AnimationClock::new();
        let first = clock.spinner_char();
        clock.tick();
        assert_ne!(clock.spinner_char(), first);
        for _ in 0..9 {
            clock.tick();
        }
        assert_eq!(clock.spinner_char(), first);
    }
}
