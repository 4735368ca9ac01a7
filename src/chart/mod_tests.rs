use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::error::Co2Error;

/// Surface that records draws and disposals in a shared log.
#[derive(Default, Clone)]
struct RecordingSurface {
    log: Rc<RefCell<Vec<String>>>,
    next: u32,
    fail: bool,
}

impl ChartSurface for RecordingSurface {
    type Handle = u32;

    fn draw(&mut self, spec: &ChartSpec) -> Result<u32> {
        if self.fail {
            return Err(Co2Error::Chart("surface unavailable".to_string()));
        }
        self.next += 1;
        self.log
            .borrow_mut()
            .push(format!("draw {} {}", self.next, spec.title));
        Ok(self.next)
    }

    fn dispose(&mut self, handle: u32) {
        self.log.borrow_mut().push(format!("dispose {handle}"));
    }
}

fn spec(title: &str) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Bar,
        title: title.to_string(),
        labels: vec!["Car".to_string()],
        dataset_label: "kg".to_string(),
        values: vec![1.0],
        colors: vec!["#4CAF50".to_string()],
        options: ChartOptions::default(),
    }
}

#[test]
fn replace_disposes_previous_chart_before_drawing() {
    let surface = RecordingSurface::default();
    let log = Rc::clone(&surface.log);
    let mut slot = ChartSlot::new(surface);

    slot.replace(spec("first")).unwrap();
    slot.replace(spec("second")).unwrap();

    assert_eq!(
        *log.borrow(),
        vec!["draw 1 first", "dispose 1", "draw 2 second"]
    );
    assert_eq!(slot.spec().unwrap().title, "second");
}

#[test]
fn clear_empty_slot_is_noop() {
    let surface = RecordingSurface::default();
    let log = Rc::clone(&surface.log);
    let mut slot = ChartSlot::new(surface);

    slot.clear();
    slot.clear();

    assert!(log.borrow().is_empty());
    assert!(!slot.is_live());
}

#[test]
fn clear_disposes_once() {
    let surface = RecordingSurface::default();
    let log = Rc::clone(&surface.log);
    let mut slot = ChartSlot::new(surface);

    slot.replace(spec("only")).unwrap();
    slot.clear();
    slot.clear();

    assert_eq!(*log.borrow(), vec!["draw 1 only", "dispose 1"]);
    assert!(slot.spec().is_none());
}

#[test]
fn failed_draw_leaves_slot_empty() {
    let surface = RecordingSurface::default();
    let log = Rc::clone(&surface.log);
    let mut slot = ChartSlot::new(surface);
    slot.replace(spec("before")).unwrap();

    let mut failing = ChartSlot::new(RecordingSurface {
        fail: true,
        ..RecordingSurface::default()
    });
    assert!(failing.replace(spec("never")).is_err());
    assert!(!failing.is_live());

    // The healthy slot is untouched.
    assert_eq!(*log.borrow(), vec!["draw 1 before"]);
}

#[test]
fn default_options_begin_at_zero() {
    assert!(ChartOptions::default().begin_at_zero);
}

#[test]
fn spec_consistency() {
    let mut s = spec("x");
    assert!(s.is_consistent());
    assert_eq!(s.bar_count(), 1);
    s.labels.push("Bus".to_string());
    assert!(!s.is_consistent());
}
