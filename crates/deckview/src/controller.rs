/// Navigation state for one viewing session.
///
/// Owns the current slide index and the fullscreen flag. All boundary
/// operations clamp or ignore; nothing here ever fails. The fullscreen flag
/// is optimistic: it records what this session last asked the host for, not
/// what the host actually did.
pub struct Controller {
    slide_count: usize,
    current_index: usize,
    is_fullscreen: bool,
}

/// Render-ready projection of the session state. Pure derivation; the
/// presentation layer reads this and never touches the controller fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub index: usize,
    pub count: usize,
    /// Percentage of the deck covered, counting the current slide as seen.
    pub progress: f32,
    pub is_first: bool,
    pub is_last: bool,
    pub is_fullscreen: bool,
}

impl Controller {
    /// Start a session on the first slide, windowed. `slide_count` comes from
    /// a validated [`Deck`](crate::deck::Deck) and is always at least 1.
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            current_index: 0,
            is_fullscreen: false,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    /// Advance one slide; no-op on the last slide (no wraparound).
    pub fn next(&mut self) {
        if self.current_index + 1 < self.slide_count {
            self.current_index += 1;
        }
    }

    /// Retreat one slide; no-op on the first slide.
    pub fn previous(&mut self) {
        if self.current_index > 0 {
            self.current_index -= 1;
        }
    }

    /// Go directly to `index`. Out-of-range requests are ignored; the
    /// position dots only ever hand us valid indices, but clicks are
    /// untrusted input all the same.
    pub fn jump_to(&mut self, index: usize) {
        if index < self.slide_count {
            self.current_index = index;
        }
    }

    /// Flip the local fullscreen flag and return the state the host should
    /// now be put in. The caller forwards that to the host fire-and-forget;
    /// if the host exits fullscreen behind our back (window manager
    /// shortcut, for instance) the flag drifts until the next toggle.
    pub fn toggle_fullscreen(&mut self) -> bool {
        self.is_fullscreen = !self.is_fullscreen;
        self.is_fullscreen
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index == self.slide_count - 1
    }

    pub fn progress_percentage(&self) -> f32 {
        (self.current_index + 1) as f32 / self.slide_count as f32 * 100.0
    }

    /// 1-based position label, e.g. "3 / 12".
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.current_index + 1, self.slide_count)
    }

    pub fn view(&self) -> ViewState {
        ViewState {
            index: self.current_index,
            count: self.slide_count,
            progress: self.progress_percentage(),
            is_first: self.is_first(),
            is_last: self.is_last(),
            is_fullscreen: self.is_fullscreen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_slide_windowed() {
        let c = Controller::new(5);
        assert_eq!(c.current_index(), 0);
        assert!(!c.is_fullscreen());
        assert!(c.is_first());
        assert!(!c.is_last());
    }

    #[test]
    fn next_advances_and_clamps_at_end() {
        let mut c = Controller::new(3);
        c.next();
        assert_eq!(c.current_index(), 1);
        c.next();
        assert_eq!(c.current_index(), 2);
        assert!(c.is_last());
        // Clamped, not wrapped
        c.next();
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn previous_retreats_and_clamps_at_start() {
        let mut c = Controller::new(3);
        c.previous();
        assert_eq!(c.current_index(), 0);
        c.next();
        c.previous();
        assert_eq!(c.current_index(), 0);
        c.previous();
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn index_stays_in_bounds_under_arbitrary_navigation() {
        for count in 1..=6 {
            let mut c = Controller::new(count);
            // A fixed pseudo-random walk, heavy on boundary pressure
            let steps = [
                true, true, true, true, false, true, false, false, false, false, true, true, false,
                true, true, true, true, true, false, false,
            ];
            for forward in steps {
                if forward {
                    c.next();
                } else {
                    c.previous();
                }
                assert!(c.current_index() < count);
            }
        }
    }

    #[test]
    fn jump_to_sets_index_directly() {
        let mut c = Controller::new(5);
        c.jump_to(2);
        assert_eq!(c.current_index(), 2);
        c.jump_to(4);
        assert_eq!(c.current_index(), 4);
        c.jump_to(0);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn jump_to_ignores_out_of_range() {
        let mut c = Controller::new(5);
        c.jump_to(2);
        c.jump_to(5);
        assert_eq!(c.current_index(), 2);
        c.jump_to(usize::MAX);
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn progress_matches_position() {
        let mut c = Controller::new(4);
        assert_eq!(c.progress_percentage(), 25.0);
        c.next();
        assert_eq!(c.progress_percentage(), 50.0);
        c.jump_to(3);
        assert_eq!(c.progress_percentage(), 100.0);
    }

    #[test]
    fn three_slide_walkthrough() {
        let mut c = Controller::new(3);
        c.next();
        assert_eq!(c.current_index(), 1);
        let expected = 2.0 / 3.0 * 100.0;
        assert!((c.progress_percentage() - expected).abs() < 1e-4);
        c.next();
        assert_eq!(c.current_index(), 2);
        assert_eq!(c.progress_percentage(), 100.0);
        assert!(c.is_last());
        c.next();
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn single_slide_deck_is_first_and_last() {
        let mut c = Controller::new(1);
        assert!(c.is_first());
        assert!(c.is_last());
        assert_eq!(c.progress_percentage(), 100.0);
        c.next();
        assert_eq!(c.current_index(), 0);
        c.previous();
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn fullscreen_toggle_round_trips_regardless_of_host() {
        let mut c = Controller::new(2);
        assert!(c.toggle_fullscreen());
        assert!(c.is_fullscreen());
        assert!(!c.toggle_fullscreen());
        assert!(!c.is_fullscreen());
    }

    #[test]
    fn fullscreen_is_independent_of_navigation() {
        let mut c = Controller::new(3);
        c.toggle_fullscreen();
        c.next();
        c.next();
        c.previous();
        assert!(c.is_fullscreen());
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn position_label_is_one_based() {
        let mut c = Controller::new(12);
        assert_eq!(c.position_label(), "1 / 12");
        c.jump_to(2);
        assert_eq!(c.position_label(), "3 / 12");
    }

    #[test]
    fn view_state_mirrors_controller() {
        let mut c = Controller::new(5);
        c.jump_to(2);
        c.toggle_fullscreen();
        let v = c.view();
        assert_eq!(v.index, 2);
        assert_eq!(v.count, 5);
        assert!((v.progress - 60.0).abs() < 1e-4);
        assert!(!v.is_first);
        assert!(!v.is_last);
        assert!(v.is_fullscreen);
    }
}
