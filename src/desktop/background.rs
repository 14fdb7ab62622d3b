//! Video background rotation.
//!
//! Two `<video>` players take turns: one is visible and playing while the
//! other preloads the next clip. Each rotation swaps their roles.

/// What the binding does after a rotation tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crossfade<'a> {
    /// Player slot (0 or 1) to play and fade in.
    pub show: usize,
    /// Slot to fade out; after the preload delay it loads `preload`.
    pub hide: usize,
    pub preload: &'a str,
}

#[derive(Debug, Clone)]
pub struct VideoRotation {
    videos: Vec<String>,
    current: usize,
    active_slot: usize,
}

impl VideoRotation {
    /// `None` when there is nothing to play.
    pub fn new(videos: Vec<String>) -> Option<Self> {
        if videos.is_empty() {
            return None;
        }
        Some(Self { videos, current: 0, active_slot: 0 })
    }

    pub fn current(&self) -> &str {
        &self.videos[self.current]
    }

    /// Clip after the current one, wrapping.
    pub fn upcoming(&self) -> &str {
        &self.videos[(self.current + 1) % self.videos.len()]
    }

    pub fn active_slot(&self) -> usize {
        self.active_slot
    }

    pub fn advance(&mut self) -> Crossfade<'_> {
        self.current = (self.current + 1) % self.videos.len();
        let hide = self.active_slot;
        self.active_slot = 1 - hide;
        Crossfade { show: self.active_slot, hide, preload: self.upcoming() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clips(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("clip{i}.mp4")).collect()
    }

    #[test]
    fn test_empty_list_has_no_rotation() {
        assert!(VideoRotation::new(Vec::new()).is_none());
    }

    #[test]
    fn test_slots_alternate_and_preload_runs_ahead() {
        let mut r = VideoRotation::new(clips(3)).unwrap();
        assert_eq!((r.current(), r.upcoming(), r.active_slot()), ("clip0.mp4", "clip1.mp4", 0));

        assert_eq!(r.advance(), Crossfade { show: 1, hide: 0, preload: "clip2.mp4" });
        assert_eq!(r.current(), "clip1.mp4");
        assert_eq!(r.advance(), Crossfade { show: 0, hide: 1, preload: "clip0.mp4" });
        assert_eq!(r.advance(), Crossfade { show: 1, hide: 0, preload: "clip1.mp4" });
        assert_eq!(r.current(), "clip0.mp4");
    }

    #[test]
    fn test_single_clip_keeps_reloading_itself() {
        let mut r = VideoRotation::new(clips(1)).unwrap();
        assert_eq!(r.upcoming(), "clip0.mp4");
        assert_eq!(r.advance().preload, "clip0.mp4");
    }
}
