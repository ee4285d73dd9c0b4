use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tile_typer::core::{GameSnapshot, GameState, SimpleRng};
use tile_typer::types::{GameAction, HINT_BUTTON_POSITION, Position};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn core_hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    // Equal-length words: the first round sizes the buffers for every later one.
    let mut gs = GameState::from_words(["cat", "dog", "sun", "owl"], SimpleRng::new(1)).unwrap();
    let mut snap = GameSnapshot::default();

    // Warm-up.
    gs.advance_time(16);
    gs.snapshot_into(&mut snap);

    let allocs = with_alloc_counting(|| {
        // Ticks, including timeouts that deal new rounds.
        for _ in 0..2_000 {
            gs.advance_time(16);
        }

        for i in 0..400 {
            if gs.is_game_over() {
                let _ = gs.apply_action(GameAction::Restart);
            }

            // Mix out-of-order clicks, hints, misses and correct clicks.
            if let Some(&wrong) = gs.positions().get(1) {
                if i % 3 == 0 {
                    let _ = gs.resolve_click(wrong);
                }
            }
            if i % 5 == 0 {
                let _ = gs.resolve_click(HINT_BUTTON_POSITION);
            }
            let _ = gs.resolve_click(Position::new(-1, -1));
            if let Some(&next) = gs.positions().first() {
                let _ = gs.apply_action(GameAction::Click(next));
            }
            let _ = gs.apply_action(GameAction::AddTime);
            gs.advance_time(16);
            gs.snapshot_into(&mut snap);
        }
    });

    assert_eq!(allocs, 0);
}
