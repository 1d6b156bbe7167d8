//! Drag Engine
//!
//! Pointer tracking for one drag kind. A session starts on pointer-down
//! over a drag handle and ends on pointer-up (commit) or on Escape /
//! pointercancel (discard). While it runs, document-level listeners feed
//! every move through the hit tester into the indicator.

use std::marker::PhantomData;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::dom::{Ghost, Listener, ListenerGuard, SelectionLock};
use crate::geometry::Point;
use crate::hit_test::{attrs, hit_test};
use crate::indicator::{place, DropIndicator};
use crate::kind::DragKind;
use crate::session::{DragSession, Release};

/// The application side of an engine: read access to the collections and
/// a sink for finished drags.
pub trait DragHost<K: DragKind>: 'static {
    /// Run `f` against the current collections without tracking
    fn inspect<R>(&self, f: impl FnOnce(&K::Collections) -> R) -> R;

    /// Commit (or reject) a finished drag
    fn release(&self, release: Release<K::Container, K::Id>);
}

/// Everything owned by the in-flight drag
struct ActiveDrag<K: DragKind> {
    session: DragSession<K::Container, K::Id>,
    ghost: Option<Ghost>,
    lock: Option<SelectionLock>,
    listeners: Option<ListenerGuard>,
}

/// Copyable handle to one engine instance
pub struct DragEngine<K: DragKind, H: DragHost<K>> {
    active: StoredValue<Option<ActiveDrag<K>>, LocalStorage>,
    host: StoredValue<H, LocalStorage>,
    dragging: RwSignal<Option<K::Id>>,
    indicator: DropIndicator,
    kind: PhantomData<fn() -> K>,
}

impl<K: DragKind, H: DragHost<K>> Clone for DragEngine<K, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: DragKind, H: DragHost<K>> Copy for DragEngine<K, H> {}

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|win| win.document())
}

fn point_of(ev: &web_sys::MouseEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

fn entry_selector<K: DragKind>() -> String {
    format!(
        "[{}=\"{}\"][{}=\"{}\"]",
        attrs::SCOPE,
        K::SCOPE,
        attrs::ROLE,
        attrs::ROLE_ENTRY
    )
}

impl<K: DragKind, H: DragHost<K>> DragEngine<K, H> {
    pub fn new(host: H) -> Self {
        Self {
            active: StoredValue::new_local(None),
            host: StoredValue::new_local(host),
            dragging: RwSignal::new(None),
            indicator: DropIndicator::new(),
            kind: PhantomData,
        }
    }

    pub fn indicator(&self) -> DropIndicator {
        self.indicator
    }

    /// Whether `id` is being dragged (tracked)
    pub fn is_dragging(&self, id: &K::Id) -> bool {
        self.dragging.with(|dragging| dragging.as_ref() == Some(id))
    }

    pub fn is_active(&self) -> bool {
        self.active.with_value(|active| active.is_some())
    }

    /// Pointer-down handler for the drag handle of entry `id`
    pub fn make_on_pointerdown(self, id: K::Id) -> impl Fn(web_sys::PointerEvent) + Clone + 'static {
        move |ev: web_sys::PointerEvent| {
            if ev.button() == 0 {
                self.begin(&id, &ev);
            }
        }
    }

    fn begin(self, id: &K::Id, ev: &web_sys::PointerEvent) {
        if self.is_active() {
            return;
        }
        let point = point_of(ev);
        let session = self
            .host
            .with_value(|host| host.inspect(|collections| DragSession::begin::<K>(collections, id, point)));
        let Some(session) = session else {
            log::debug!("[DND] {} {:?} is not draggable", K::SCOPE, id);
            return;
        };
        let Some(document) = document() else {
            return;
        };
        ev.prevent_default();

        let ghost = ev
            .current_target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .and_then(|handle| handle.closest(&entry_selector::<K>()).ok().flatten())
            .and_then(|entry| Ghost::spawn(&entry, point));
        let lock = SelectionLock::engage(&document);
        let listeners = self.listen(&document);

        log::debug!(
            "[DND] begin {} {:?} at {:?}[{}]",
            K::SCOPE,
            id,
            session.origin().container,
            session.origin().index
        );
        self.active.set_value(Some(ActiveDrag {
            session,
            ghost,
            lock,
            listeners: Some(listeners),
        }));
        self.dragging.set(Some(id.clone()));
    }

    fn listen(self, document: &web_sys::Document) -> ListenerGuard {
        let on_move: Listener = Closure::new(move |ev: web_sys::Event| {
            if let Some(ev) = ev.dyn_ref::<web_sys::MouseEvent>() {
                self.track(point_of(ev));
            }
        });
        let on_up: Listener = Closure::new(move |ev: web_sys::Event| {
            if let Some(ev) = ev.dyn_ref::<web_sys::MouseEvent>() {
                self.drop_at(point_of(ev));
            }
        });
        let on_cancel: Listener = Closure::new(move |_ev: web_sys::Event| {
            self.cancel("pointercancel");
        });
        let on_key: Listener = Closure::new(move |ev: web_sys::Event| {
            if let Some(key) = ev.dyn_ref::<web_sys::KeyboardEvent>() {
                if key.key() == "Escape" {
                    key.prevent_default();
                    self.cancel("escape");
                }
            }
        });

        ListenerGuard::attach(
            document.clone().into(),
            vec![
                ("pointermove", on_move),
                ("pointerup", on_up),
                ("pointercancel", on_cancel),
                ("keydown", on_key),
            ],
        )
    }

    fn track(self, point: Point) {
        let hit = document().and_then(|doc| hit_test::<K>(&doc, point));
        let placement = self
            .active
            .try_update_value(|active| {
                let active = active.as_mut()?;
                if let Some(ghost) = &active.ghost {
                    ghost.follow(point);
                }
                let placement = hit
                    .as_ref()
                    .filter(|hit| !hit.target.slot.references(active.session.dragged()))
                    .map(|hit| place(K::AXIS, hit));
                active.session.track(point, hit.map(|hit| hit.target));
                Some(placement)
            })
            .flatten();
        if let Some(placement) = placement {
            self.indicator.show(placement);
        }
    }

    fn take(self) -> Option<ActiveDrag<K>> {
        self.active.try_update_value(Option::take).flatten()
    }

    fn drop_at(self, point: Point) {
        let Some(active) = self.take() else {
            return;
        };
        let ActiveDrag { mut session, ghost, lock, listeners } = active;
        let hit = document().and_then(|doc| hit_test::<K>(&doc, point));
        session.track(point, hit.map(|hit| hit.target));

        let release = session.finish();
        log::debug!("[DND] release {} {:?} -> {:?}", K::SCOPE, release.dragged, release.target);
        self.host.with_value(|host| host.release(release));

        self.teardown(ghost, lock, listeners);
    }

    fn cancel(self, reason: &str) {
        let Some(active) = self.take() else {
            return;
        };
        log::info!("[DND] {} drag of {:?} cancelled ({})", K::SCOPE, active.session.dragged(), reason);
        let ActiveDrag { ghost, lock, listeners, .. } = active;
        self.teardown(ghost, lock, listeners);
    }

    fn teardown(self, ghost: Option<Ghost>, lock: Option<SelectionLock>, listeners: Option<ListenerGuard>) {
        drop(ghost);
        drop(lock);
        if let Some(listeners) = listeners {
            listeners.release();
        }
        self.indicator.clear();
        self.dragging.set(None);
    }
}
