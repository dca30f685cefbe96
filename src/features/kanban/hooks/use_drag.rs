use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::features::kanban::services::DragRelease;

/// Per-card pointer tracking. Lives only as long as the card is rendered.
#[derive(Clone, Copy)]
pub struct DragHandle {
    pub offset_x: ReadSignal<f64>,
    pub dragging: ReadSignal<bool>,
    pub springing: ReadSignal<bool>,
    set_offset_x: WriteSignal<f64>,
    set_dragging: WriteSignal<bool>,
    set_springing: WriteSignal<bool>,
    start_x: StoredValue<Option<f64>>,
    spring_back_ms: u32,
}

pub fn use_drag(spring_back_ms: u32) -> DragHandle {
    let (offset_x, set_offset_x) = signal(0.0_f64);
    let (dragging, set_dragging) = signal(false);
    let (springing, set_springing) = signal(false);

    DragHandle {
        offset_x,
        dragging,
        springing,
        set_offset_x,
        set_dragging,
        set_springing,
        start_x: StoredValue::new(None),
        spring_back_ms,
    }
}

impl DragHandle {
    pub fn begin(&self, client_x: f64) {
        self.start_x.set_value(Some(client_x));
        self.set_springing.set(false);
        self.set_dragging.set(true);
    }

    pub fn track(&self, client_x: f64) {
        if let Some(start) = self.start_x.get_value() {
            self.set_offset_x.set(client_x - start);
        }
    }

    /// Ends the drag and reports how far the card travelled. Returns `None`
    /// if no drag was in progress.
    pub fn release(&self, client_x: f64) -> Option<DragRelease> {
        let start = self.settle()?;
        Some(DragRelease {
            offset_x: client_x - start,
        })
    }

    /// Ends the drag without reporting it.
    pub fn cancel(&self) {
        let _ = self.settle();
    }

    // Clears the drag and lets the card spring back to its resting spot.
    fn settle(&self) -> Option<f64> {
        let start = self.start_x.try_update_value(|start| start.take()).flatten()?;
        self.set_dragging.set(false);
        self.set_offset_x.set(0.0);
        self.set_springing.set(true);

        let set_springing = self.set_springing;
        let delay = self.spring_back_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            set_springing.try_set(false);
        });

        Some(start)
    }

    pub fn transform(&self) -> String {
        format!("translateX({}px)", self.offset_x.get())
    }
}
