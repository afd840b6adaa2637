// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame-to-frame mark diffing.
//!
//! Chart renderers recompute their full mark list on every state change. A [`Scene`] keeps
//! the previous frame keyed by [`MarkId`] and reports what actually changed, so a hover
//! toggle yields a handful of `Update`s instead of a full redraw.

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};
use kurbo::Rect;

use crate::mark::{Mark, MarkId, MarkKind, MarkPayload};

/// A change between two frames.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkDiff {
    /// A mark that did not exist in the previous frame.
    Enter {
        /// Mark id.
        id: MarkId,
        /// Payload kind.
        kind: MarkKind,
        /// Paint-order hint.
        z_index: i32,
        /// New payload.
        new: Arc<MarkPayload>,
        /// Bounds of the new payload, if known.
        bounds: Option<Rect>,
    },
    /// A mark whose payload or z-index changed.
    Update {
        /// Mark id.
        id: MarkId,
        /// Payload kind of the new payload.
        kind: MarkKind,
        /// Previous z-index.
        old_z_index: i32,
        /// New z-index.
        new_z_index: i32,
        /// Previous payload.
        old: Arc<MarkPayload>,
        /// New payload.
        new: Arc<MarkPayload>,
        /// Bounds of the previous payload.
        old_bounds: Option<Rect>,
        /// Bounds of the new payload.
        new_bounds: Option<Rect>,
    },
    /// A mark that is absent from the new frame.
    Exit {
        /// Mark id.
        id: MarkId,
        /// Payload kind.
        kind: MarkKind,
        /// Previous payload.
        old: Arc<MarkPayload>,
        /// Bounds of the previous payload.
        bounds: Option<Rect>,
    },
}

impl MarkDiff {
    /// Returns the id of the affected mark.
    pub fn id(&self) -> MarkId {
        match self {
            Self::Enter { id, .. } | Self::Update { id, .. } | Self::Exit { id, .. } => *id,
        }
    }
}

#[derive(Clone, Debug)]
struct Entry {
    z_index: i32,
    payload: Arc<MarkPayload>,
}

/// The retained state of the last rendered frame.
#[derive(Debug, Default)]
pub struct Scene {
    marks: HashMap<MarkId, Entry>,
    frame: u64,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames ticked so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Number of marks retained from the last frame.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if the last frame had no marks.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Returns the retained payload for `id`.
    pub fn get(&self, id: MarkId) -> Option<&MarkPayload> {
        self.marks.get(&id).map(|e| &*e.payload)
    }

    /// Replaces the retained frame with `marks` and returns the diffs against the previous one.
    ///
    /// Enter/Update diffs follow the order of `marks`; Exit diffs follow ascending id order.
    /// Ids must be unique within a frame: after the first occurrence, later marks with the
    /// same id are ignored.
    pub fn tick(&mut self, marks: Vec<Mark>) -> Vec<MarkDiff> {
        self.frame += 1;

        let mut diffs = Vec::new();
        let mut next: HashMap<MarkId, Entry> = HashMap::with_capacity(marks.len());
        let mut seen: HashSet<MarkId> = HashSet::with_capacity(marks.len());

        for mark in marks {
            if !seen.insert(mark.id) {
                continue;
            }
            let kind = mark.payload.kind();
            let bounds = mark.payload.bounds();
            match self.marks.remove(&mark.id) {
                None => {
                    let payload = Arc::new(mark.payload);
                    diffs.push(MarkDiff::Enter {
                        id: mark.id,
                        kind,
                        z_index: mark.z_index,
                        new: payload.clone(),
                        bounds,
                    });
                    next.insert(
                        mark.id,
                        Entry {
                            z_index: mark.z_index,
                            payload,
                        },
                    );
                }
                Some(old) => {
                    if *old.payload == mark.payload && old.z_index == mark.z_index {
                        next.insert(mark.id, old);
                        continue;
                    }
                    let payload = Arc::new(mark.payload);
                    diffs.push(MarkDiff::Update {
                        id: mark.id,
                        kind,
                        old_z_index: old.z_index,
                        new_z_index: mark.z_index,
                        old_bounds: old.payload.bounds(),
                        old: old.payload,
                        new: payload.clone(),
                        new_bounds: bounds,
                    });
                    next.insert(
                        mark.id,
                        Entry {
                            z_index: mark.z_index,
                            payload,
                        },
                    );
                }
            }
        }

        let mut exits: Vec<(MarkId, Entry)> = self.marks.drain().collect();
        exits.sort_by_key(|(id, _)| *id);
        for (id, old) in exits {
            diffs.push(MarkDiff::Exit {
                id,
                kind: old.payload.kind(),
                bounds: old.payload.bounds(),
                old: old.payload,
            });
        }

        self.marks = next;
        diffs
    }

    /// Returns the retained marks in paint order (`(z_index, id)` ascending).
    pub fn marks_in_paint_order(&self) -> Vec<(MarkId, i32, Arc<MarkPayload>)> {
        let mut out: Vec<_> = self
            .marks
            .iter()
            .map(|(id, e)| (*id, e.z_index, e.payload.clone()))
            .collect();
        out.sort_by_key(|(id, z, _)| (*z, *id));
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use kurbo::Rect;
    use peniko::Brush;
    use peniko::color::palette::css;

    use super::*;
    use crate::mark::RectMark;

    fn rect_mark(id: u64, x0: f64, fill: Brush) -> Mark {
        Mark::new(
            MarkId::from_raw(id),
            MarkPayload::Rect(RectMark {
                rect: Rect::new(x0, 0.0, x0 + 10.0, 10.0),
                corner_radius: 0.0,
                fill,
                stroke: None,
            }),
        )
    }

    #[test]
    fn first_tick_enters_every_mark() {
        let mut scene = Scene::new();
        let diffs = scene.tick(vec![
            rect_mark(1, 0.0, css::TOMATO.into()),
            rect_mark(2, 20.0, css::TOMATO.into()),
        ]);
        assert_eq!(diffs.len(), 2);
        assert!(
            diffs.iter().all(|d| matches!(d, MarkDiff::Enter { .. })),
            "expected only enters, got {diffs:?}"
        );
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.frame(), 1);
    }

    #[test]
    fn unchanged_marks_produce_no_diffs() {
        let mut scene = Scene::new();
        scene.tick(vec![rect_mark(1, 0.0, css::TOMATO.into())]);
        let diffs = scene.tick(vec![rect_mark(1, 0.0, css::TOMATO.into())]);
        assert!(diffs.is_empty(), "expected no diffs, got {diffs:?}");
    }

    #[test]
    fn changed_payload_is_an_update_and_missing_mark_exits() {
        let mut scene = Scene::new();
        scene.tick(vec![
            rect_mark(1, 0.0, css::TOMATO.into()),
            rect_mark(2, 20.0, css::TOMATO.into()),
        ]);
        let diffs = scene.tick(vec![rect_mark(1, 0.0, css::GOLD.into())]);
        let [
            MarkDiff::Update {
                id: updated,
                new,
                ..
            },
            MarkDiff::Exit { id: exited, .. },
        ] = &diffs[..]
        else {
            panic!("expected an update then an exit, got {diffs:?}");
        };
        assert_eq!(*updated, MarkId::from_raw(1));
        assert_eq!(*exited, MarkId::from_raw(2));
        let MarkPayload::Rect(r) = &**new else {
            panic!("expected rect payload");
        };
        assert_eq!(r.fill, Brush::from(css::GOLD));
    }

    #[test]
    fn z_index_change_alone_is_an_update() {
        let mut scene = Scene::new();
        scene.tick(vec![rect_mark(1, 0.0, css::TOMATO.into())]);
        let diffs = scene.tick(vec![rect_mark(1, 0.0, css::TOMATO.into()).with_z_index(5)]);
        let [MarkDiff::Update { new_z_index, .. }] = &diffs[..] else {
            panic!("expected a single update, got {diffs:?}");
        };
        assert_eq!(*new_z_index, 5);
    }

    #[test]
    fn duplicate_ids_keep_the_first_mark() {
        let mut scene = Scene::new();
        let diffs = scene.tick(vec![
            rect_mark(1, 0.0, css::TOMATO.into()),
            rect_mark(1, 50.0, css::GOLD.into()),
        ]);
        assert_eq!(diffs.len(), 1);
        let Some(MarkPayload::Rect(r)) = scene.get(MarkId::from_raw(1)) else {
            panic!("expected retained rect");
        };
        assert_eq!(r.rect.x0, 0.0);
    }

    #[test]
    fn paint_order_sorts_by_z_then_id() {
        let mut scene = Scene::new();
        scene.tick(vec![
            rect_mark(3, 0.0, css::TOMATO.into()),
            rect_mark(1, 0.0, css::TOMATO.into()).with_z_index(10),
            rect_mark(2, 0.0, css::TOMATO.into()),
        ]);
        let order: Vec<u64> = scene
            .marks_in_paint_order()
            .iter()
            .map(|(id, _, _)| id.0)
            .collect();
        assert_eq!(order, vec![2, 3, 1]);
    }
}
