//! Extension of the 24-bit SysTick down-counter to 64 bits

/// The value SysTick reloads from. The counter period is `RELOAD + 1` ticks.
pub(crate) const RELOAD: u32 = 0xffffff;

/// Combine the number of observed wrap-arounds with the current counter
/// value into a tick count since the counter was started.
///
/// The counter counts down from `RELOAD` to `0`, so the elapsed ticks within
/// the current period are `current ^ RELOAD`.
#[inline]
pub(crate) fn compose_ticks(cycle: usize, current: u32) -> u64 {
    ((current & RELOAD) ^ RELOAD) as u64 | ((cycle as u64) << 24)
}
