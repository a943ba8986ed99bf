//! Yew components binding browser events to the `oxygen-core` models.
//!
//! # Design
//! - Each component keeps its model in a `use_mut_ref` cell and re-syncs it
//!   only when the incoming props change.
//! - Only the props that changed are pushed into the model, so toggling one
//!   prop does not reset state the user changed through another.
//! - Models report what changed; components forward that to callbacks and
//!   force a re-render when reflected state moved. Changes caused by new
//!   props are reported after the render.

pub(crate) mod button;
pub(crate) mod checkbox;
pub(crate) mod dialog;
pub(crate) mod icon;
pub(crate) mod showcase;
pub(crate) mod slider;
pub(crate) mod tabs;
pub(crate) mod text_field;

use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

pub(crate) use button::Button;
pub(crate) use checkbox::Checkbox;
pub(crate) use dialog::Dialog;
pub(crate) use icon::Icon;
pub(crate) use showcase::IconShowcase;
pub(crate) use slider::Slider;
pub(crate) use tabs::Tabs;
pub(crate) use text_field::{Input, Textarea};

/// Model cell built from the first `snapshot`; later snapshots are handed
/// to `sync` together with the last applied one.
#[hook]
pub(crate) fn use_synced_model<M, P, I, S>(snapshot: P, init: I, sync: S) -> Rc<RefCell<M>>
where
    M: 'static,
    P: PartialEq + Clone + 'static,
    I: FnOnce(&P) -> M,
    S: FnOnce(&mut M, &P, &P),
{
    use_notifying_model(
        snapshot,
        init,
        move |model, previous, next| {
            sync(model, previous, next);
            None
        },
        Callback::from(|()| ()),
    )
}

/// [`use_synced_model`] whose `sync` may commit a change; the committed
/// value is passed to `notify` once the render is done.
#[hook]
pub(crate) fn use_notifying_model<M, P, C, I, S>(
    snapshot: P,
    init: I,
    sync: S,
    notify: Callback<C>,
) -> Rc<RefCell<M>>
where
    M: 'static,
    P: PartialEq + Clone + 'static,
    C: 'static,
    I: FnOnce(&P) -> M,
    S: FnOnce(&mut M, &P, &P) -> Option<C>,
{
    let model = {
        let snapshot = snapshot.clone();
        use_mut_ref(move || init(&snapshot))
    };
    let applied = {
        let snapshot = snapshot.clone();
        use_mut_ref(move || snapshot)
    };
    let pending = use_mut_ref(|| None::<C>);

    let previous = applied.borrow().clone();
    if previous != snapshot {
        let committed = sync(&mut model.borrow_mut(), &previous, &snapshot);
        if committed.is_some() {
            *pending.borrow_mut() = committed;
        }
        *applied.borrow_mut() = snapshot;
    }

    use_effect(move || {
        let committed = pending.borrow_mut().take();
        if let Some(committed) = committed {
            notify.emit(committed);
        }
        || ()
    });
    model
}
