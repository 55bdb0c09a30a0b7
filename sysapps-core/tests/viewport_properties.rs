#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Viewport invariants over every small list shape and many move sequences.

use sysapps_core::{PagedList, Row, RowList, Viewport};

/// Deterministic move sequence: a tiny LCG mapped onto {-1, 0, +1}.
fn moves(seed: u64, len: usize) -> Vec<i32> {
    let mut state = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            match (state >> 33) % 5 {
                0 | 1 => 1,
                2 | 3 => -1,
                _ => 0,
            }
        })
        .collect()
}

fn assert_invariants(vp: &Viewport, n: usize, context: &str) {
    if n == 0 {
        assert_eq!((vp.cursor(), vp.scroll_offset()), (0, 0), "{context}");
        return;
    }
    assert!(vp.cursor() < n, "cursor out of range: {context}");
    assert!(vp.scroll_offset() <= vp.cursor(), "cursor above window: {context}");
    assert!(
        vp.cursor() < vp.scroll_offset() + vp.page_size(),
        "cursor below window: {context}"
    );
    if n <= vp.page_size() {
        assert_eq!(vp.scroll_offset(), 0, "short list scrolled: {context}");
    }
}

#[test]
fn invariants_hold_after_every_move() {
    for n in 0..=12 {
        for page_size in 1..=8 {
            for seed in 0..25 {
                let mut vp = Viewport::new(page_size);
                for (step, d) in moves(seed, 60).into_iter().enumerate() {
                    let before = vp;
                    vp.move_by(d, n);

                    let context = format!("n={n} page={page_size} seed={seed} step={step} d={d}");
                    assert_invariants(&vp, n, &context);

                    let shift = before.scroll_offset().abs_diff(vp.scroll_offset());
                    assert!(shift <= 1, "scroll jumped by {shift}: {context}");
                }
            }
        }
    }
}

#[test]
fn cold_replay_is_deterministic() {
    for n in [0, 1, 5, 7, 8, 30] {
        for seed in 0..10 {
            let sequence = moves(seed, 80);
            let run = || {
                let mut vp = Viewport::new(7);
                for &d in &sequence {
                    vp.move_by(d, n);
                }
                vp
            };
            assert_eq!(run(), run(), "n={n} seed={seed}");
        }
    }
}

#[test]
fn moves_past_the_ends_are_idempotent() {
    for n in 1..=12 {
        for page_size in 1..=8 {
            let mut vp = Viewport::new(page_size);
            vp.move_by(-1, n);
            assert_eq!((vp.cursor(), vp.scroll_offset()), (0, 0));

            for _ in 0..n {
                vp.move_by(1, n);
            }
            let bottom = vp;
            vp.move_by(1, n);
            assert_eq!(vp, bottom, "n={n} page={page_size}");
            assert_eq!(vp.cursor(), n - 1);
        }
    }
}

#[test]
fn ten_rows_seven_per_page() {
    let rows: RowList<u32> = (0..10).map(|i| Row::new(format!("item {i}"), i)).collect();
    let mut list = PagedList::with_rows(rows, 7);

    for _ in 0..7 {
        list.move_by(1);
    }
    assert_eq!(list.cursor(), Some(7));
    assert_eq!(list.viewport().scroll_offset(), 1);

    list.move_by(1);
    assert_eq!(list.cursor(), Some(8));
    assert_eq!(list.viewport().scroll_offset(), 2);
    assert_eq!(list.activate(), Some(8));
}

#[test]
fn rebuild_with_other_length_matches_replay() {
    for old_n in 1..=15 {
        for new_n in 1..=15 {
            let mut vp = Viewport::new(5);
            for _ in 0..old_n {
                vp.move_by(1, old_n);
            }
            vp.refit(new_n);

            let mut replay = Viewport::new(5);
            for _ in 0..vp.cursor() {
                replay.move_by(1, new_n);
            }
            assert_eq!(vp, replay, "old={old_n} new={new_n}");
        }
    }
}
