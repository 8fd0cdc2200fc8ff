//! The delayed load-more reveal.
//!
//! [`use_load_more`] returns the click handler for the load-more button. A
//! click moves the state into its loading phase, then a spawned task waits
//! `delay_ms` and widens the visible window. The task handle is kept in a
//! signal and cancelled in `use_drop`, so a view dropped mid-delay never
//! writes to its state afterwards. Dioxus also drops a scope's tasks with the
//! scope; the handle keeps the reveal owned by this hook either way.

use dioxus::core::Task;
use dioxus::prelude::*;
use store::DirectoryState;

use crate::delay::sleep_ms;

pub fn use_load_more(
    mut state: Signal<DirectoryState>,
    delay_ms: u32,
) -> impl FnMut(()) + Clone + 'static {
    let mut pending = use_signal(|| Option::<Task>::None);

    use_drop(move || {
        if let Some(task) = *pending.peek() {
            task.cancel();
        }
    });

    move |_: ()| {
        let started = state.write().begin_load_more();
        if !started {
            return;
        }
        tracing::debug!("Load more started, visible = {}", state.peek().visible_count());
        let task = spawn(async move {
            sleep_ms(delay_ms).await;
            state.write().complete_load_more();
            pending.set(None);
        });
        pending.set(Some(task));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::{NoOpMutations, VirtualDom};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;
    use store::{UserRecord, ViewConfig};

    const DELAY_MS: u32 = 200;

    /// `(visible_count, is_loading)` seen by each render of the harness.
    #[derive(Clone, Default)]
    struct Renders(Rc<RefCell<Vec<(usize, bool)>>>);

    impl Renders {
        fn push(&self, entry: (usize, bool)) {
            self.0.borrow_mut().push(entry);
        }

        fn last(&self) -> Option<(usize, bool)> {
            self.0.borrow().last().copied()
        }

        fn all(&self) -> Vec<(usize, bool)> {
            self.0.borrow().clone()
        }
    }

    /// Unmount the revealer after this many milliseconds.
    #[derive(Clone, Copy)]
    struct UnmountAfter(Option<u64>);

    fn full_batch() -> DirectoryState {
        let mut state = DirectoryState::new(&ViewConfig::default());
        state.set_records(
            (0..18)
                .map(|i| UserRecord::new(format!("User{i:02}"), "Doe", "female", format!("{i:03}"), ""))
                .collect(),
        );
        state
    }

    #[component]
    fn Harness() -> Element {
        let renders = use_context::<Renders>();
        let UnmountAfter(unmount_after) = use_context::<UnmountAfter>();
        let state = use_signal(full_batch);
        let mut shown = use_signal(|| true);

        use_hook(move || {
            if let Some(ms) = unmount_after {
                spawn(async move {
                    tokio::time::sleep(Duration::from_millis(ms)).await;
                    shown.set(false);
                });
            }
        });

        let entry = {
            let current = state.read();
            (current.visible_count(), current.is_loading())
        };
        renders.push(entry);

        rsx! {
            if shown() {
                Revealer { state, delay_ms: DELAY_MS }
            }
        }
    }

    /// Clicks load-more once on mount.
    #[component]
    fn Revealer(state: Signal<DirectoryState>, delay_ms: u32) -> Element {
        let mut load_more = use_load_more(state, delay_ms);
        use_hook(move || {
            spawn(async move { load_more(()) });
        });
        rsx! {}
    }

    fn mount(unmount_after: Option<u64>) -> (VirtualDom, Renders) {
        let renders = Renders::default();
        let mut dom = VirtualDom::new(Harness)
            .with_root_context(renders.clone())
            .with_root_context(UnmountAfter(unmount_after));
        dom.rebuild_in_place();
        (dom, renders)
    }

    /// Drive tasks and renders until `ms` have passed.
    async fn run_for(dom: &mut VirtualDom, ms: u64) {
        let deadline = tokio::time::Instant::now() + Duration::from_millis(ms);
        loop {
            tokio::select! {
                _ = dom.wait_for_work() => {}
                _ = tokio::time::sleep_until(deadline) => break,
            }
            dom.render_immediate(&mut NoOpMutations);
        }
    }

    #[tokio::test]
    async fn test_reveal_waits_for_the_delay() {
        let (mut dom, renders) = mount(None);
        assert_eq!(renders.last(), Some((9, false)));

        run_for(&mut dom, 50).await;
        assert_eq!(renders.last(), Some((9, true)));

        run_for(&mut dom, 400).await;
        assert_eq!(renders.last(), Some((12, false)));
    }

    #[tokio::test]
    async fn test_unmount_mid_delay_leaves_window_untouched() {
        let (mut dom, renders) = mount(Some(20));

        run_for(&mut dom, 500).await;

        let seen = renders.all();
        assert!(seen.contains(&(9, true)));
        assert!(seen.iter().all(|(visible, _)| *visible == 9), "{seen:?}");
    }
}
