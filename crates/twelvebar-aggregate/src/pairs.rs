//! Fixed 2:1 bar downsampling.

use twelvebar_types::Bar;

/// Combines consecutive pairs of bars into single bars.
///
/// Input must be oldest first; order is preserved. Pairs are taken from
/// index 0 without overlap, so `M` input bars produce `M / 2` output bars.
/// A trailing unpaired bar is dropped rather than emitted as a partial bar.
#[must_use]
pub fn aggregate_pairs(bars: &[Bar]) -> Vec<Bar> {
    bars.chunks_exact(2)
        .map(|pair| merge_pair(&pair[0], &pair[1]))
        .collect()
}

/// Merges two consecutive bars into one spanning both.
///
/// The earlier bar anchors the timestamp and the open; the later bar
/// supplies the close.
#[must_use]
pub fn merge_pair(first: &Bar, second: &Bar) -> Bar {
    Bar {
        t: first.t.clone(),
        o: first.o,
        h: first.h.max(second.h),
        l: first.l.min(second.l),
        c: second.c,
        v: first.v + second.v,
    }
}
