use crate::config::{
    MOVE_RIPPLE_DURATION_MS, MOVE_RIPPLE_INTERVAL_MS, MOVE_RIPPLE_SIZE, PRESS_RIPPLE_DURATION_MS,
    PRESS_RIPPLE_SIZE,
};

/// What triggered a ripple. Press ripples are the large variant spawned on
/// clicks and taps; move ripples are the small trail behind the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RippleKind {
    Move,
    Press,
}

impl RippleKind {
    /// (size px, duration ms, large?)
    pub fn params(self) -> (f64, f64, bool) {
        match self {
            RippleKind::Move => (MOVE_RIPPLE_SIZE, MOVE_RIPPLE_DURATION_MS, false),
            RippleKind::Press => (PRESS_RIPPLE_SIZE, PRESS_RIPPLE_DURATION_MS, true),
        }
    }
}

/// One reusable ripple slot. Position, size and duration are transient: they
/// are stamped on acquire and wiped on release so a recycled slot never
/// carries stale styling into its next play.
#[derive(Debug, Clone, PartialEq)]
pub struct RippleSlot {
    pub busy: bool,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub duration_ms: f64,
    pub large: bool,
}

impl RippleSlot {
    fn idle() -> Self {
        Self {
            busy: false,
            x: 0.0,
            y: 0.0,
            size: 0.0,
            duration_ms: 0.0,
            large: false,
        }
    }

    fn clear_transient(&mut self) {
        self.busy = false;
        self.x = 0.0;
        self.y = 0.0;
        self.size = 0.0;
        self.duration_ms = 0.0;
    }
}

/// Fixed-size pool of ripple slots, allocated once and never resized.
/// Acquisition is a first-free linear scan; when every slot is busy the
/// spawn is simply dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct RipplePool {
    slots: Vec<RippleSlot>,
}

impl RipplePool {
    pub fn new(size: usize) -> Self {
        Self {
            slots: vec![RippleSlot::idle(); size],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn busy_count(&self) -> usize {
        self.slots.iter().filter(|s| s.busy).count()
    }

    pub fn slot(&self, index: usize) -> Option<&RippleSlot> {
        self.slots.get(index)
    }

    /// Claims the first free slot and stamps it for one play. Returns the
    /// slot index, or `None` when the pool is exhausted.
    pub fn acquire(&mut self, x: f64, y: f64, kind: RippleKind) -> Option<usize> {
        let index = self.slots.iter().position(|s| !s.busy)?;
        let (size, duration_ms, large) = kind.params();
        let slot = &mut self.slots[index];
        slot.busy = true;
        slot.x = x;
        slot.y = y;
        slot.size = size;
        slot.duration_ms = duration_ms;
        slot.large = large;
        Some(index)
    }

    /// Returns a slot to the pool once its animation has finished. Clearing
    /// the transient fields here is what guarantees a reused slot starts from
    /// a clean slate. Out-of-range indices are ignored.
    pub fn release(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.clear_transient();
        }
    }
}

/// Time gate for move-triggered ripples: at most one per interval, measured
/// against wall-clock milliseconds supplied by the caller. The first move
/// always fires.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveGate {
    last_fire_ms: Option<f64>,
}

impl MoveGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn should_fire(&mut self, now_ms: f64) -> bool {
        let fire = match self.last_fire_ms {
            None => true,
            Some(last) => now_ms - last > MOVE_RIPPLE_INTERVAL_MS,
        };
        if fire {
            self.last_fire_ms = Some(now_ms);
        }
        fire
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RIPPLE_POOL_SIZE;

    #[test]
    fn pool_is_bounded_and_drops_overflow() {
        let mut pool = RipplePool::new(RIPPLE_POOL_SIZE);
        for i in 0..RIPPLE_POOL_SIZE {
            let got = pool.acquire(i as f64, i as f64, RippleKind::Press);
            assert_eq!(got, Some(i));
        }
        assert_eq!(pool.busy_count(), RIPPLE_POOL_SIZE);
        // eleventh spawn is a silent no-op
        assert_eq!(pool.acquire(99.0, 99.0, RippleKind::Press), None);
        assert_eq!(pool.busy_count(), RIPPLE_POOL_SIZE);
    }

    #[test]
    fn acquire_scans_in_pool_order() {
        let mut pool = RipplePool::new(3);
        assert_eq!(pool.acquire(0.0, 0.0, RippleKind::Move), Some(0));
        assert_eq!(pool.acquire(0.0, 0.0, RippleKind::Move), Some(1));
        pool.release(0);
        // freed slot 0 is preferred over untouched slot 2
        assert_eq!(pool.acquire(0.0, 0.0, RippleKind::Move), Some(0));
    }

    #[test]
    fn release_clears_transient_styling_before_reuse() {
        let mut pool = RipplePool::new(2);
        let idx = pool.acquire(40.0, 60.0, RippleKind::Press).unwrap();
        {
            let s = pool.slot(idx).unwrap();
            assert!(s.busy && s.large);
            assert_eq!((s.x, s.y, s.size, s.duration_ms), (40.0, 60.0, 80.0, 900.0));
        }
        pool.release(idx);
        let s = pool.slot(idx).unwrap();
        assert!(!s.busy);
        assert_eq!((s.x, s.y, s.size, s.duration_ms), (0.0, 0.0, 0.0, 0.0));

        let idx2 = pool.acquire(5.0, 6.0, RippleKind::Move).unwrap();
        assert_eq!(idx2, idx);
        let s = pool.slot(idx2).unwrap();
        assert_eq!((s.x, s.y, s.size, s.duration_ms), (5.0, 6.0, 26.0, 650.0));
        assert!(!s.large);
    }

    #[test]
    fn release_out_of_range_is_ignored() {
        let mut pool = RipplePool::new(1);
        pool.release(7);
        assert_eq!(pool.busy_count(), 0);
    }

    #[test]
    fn kinds_carry_fixed_parameters() {
        assert_eq!(RippleKind::Move.params(), (26.0, 650.0, false));
        assert_eq!(RippleKind::Press.params(), (80.0, 900.0, true));
    }

    #[test]
    fn move_gate_limits_to_one_per_window() {
        let mut gate = MoveGate::new();
        // moves at t = 0, 30, 50, 95, 100 → only 0 and 95 fire
        assert!(gate.should_fire(0.0));
        assert!(!gate.should_fire(30.0));
        assert!(!gate.should_fire(50.0));
        assert!(gate.should_fire(95.0));
        assert!(!gate.should_fire(100.0));
    }

    #[test]
    fn move_gate_window_is_strictly_greater_than_interval() {
        let mut gate = MoveGate::new();
        assert!(gate.should_fire(1000.0));
        assert!(!gate.should_fire(1090.0));
        assert!(gate.should_fire(1090.1));
    }

    #[test]
    fn burst_of_eleven_presses_then_recovery() {
        let mut pool = RipplePool::new(RIPPLE_POOL_SIZE);
        let mut spawned = Vec::new();
        for i in 0..11 {
            if let Some(idx) = pool.acquire(i as f64 * 10.0, 0.0, RippleKind::Press) {
                spawned.push(idx);
            }
        }
        assert_eq!(spawned.len(), RIPPLE_POOL_SIZE);
        assert_eq!(pool.busy_count(), RIPPLE_POOL_SIZE);
        // each play's completion signal frees its slot again
        for idx in spawned {
            pool.release(idx);
        }
        assert_eq!(pool.busy_count(), 0);
        assert_eq!(pool.acquire(0.0, 0.0, RippleKind::Press), Some(0));
    }
}
