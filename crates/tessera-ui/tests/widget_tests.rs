//! Integration tests for the widget entity: geometry, invalidation, focus and
//! hit testing against a real application context.

use std::cell::Cell;
use std::rc::Rc;
use tessera_core::math::Vec2;
use tessera_ui::property::{Lookup, Properties, PropertyHost, Value};
use tessera_ui::widgets::{Button, Container};
use tessera_ui::{
    Application, Element, PropertyError, RootContext, Visibility, Widget, WidgetId, widget_ref,
};

/// Application that only counts what it receives.
#[derive(Default)]
struct CountingApp {
    invalidations: Cell<u32>,
    focused: Cell<Option<WidgetId>>,
}

impl Application for CountingApp {
    fn invalidate(&self) {
        self.invalidations.set(self.invalidations.get() + 1);
    }

    fn set_focused_widget(&self, widget: Option<WidgetId>) {
        self.focused.set(widget);
    }

    fn focused_widget(&self) -> Option<WidgetId> {
        self.focused.get()
    }
}

fn square(size: f32) -> Widget {
    Widget::new(&Properties::new().with("width", size).with("height", size)).unwrap()
}

#[test]
fn test_hit_test_boundaries() {
    let widget = square(10.0);

    assert!(widget.hit_test(10.0, 10.0));
    assert!(widget.hit_test(0.0, 0.0));
    assert!(!widget.hit_test(10.0001, 5.0));
    assert!(!widget.hit_test(-0.0001, 5.0));
}

#[test]
fn test_moved_widget_hit_test() {
    let mut widget = square(10.0);
    widget.set_x(100.0).unwrap();
    widget.set_y(50.0).unwrap();

    assert!(widget.hit_test_point(Vec2::new(110.0, 60.0)));
    assert!(!widget.hit_test_point(Vec2::new(5.0, 5.0)));
}

#[test]
fn test_gone_reports_zero_and_restores() {
    let mut widget = square(25.0);
    widget.set_visibility(Visibility::Gone);

    assert_eq!(widget.width(), 0.0);
    assert_eq!(widget.height(), 0.0);
    assert!(!widget.hit_test(0.0, 0.0));

    widget.set_visibility(Visibility::Visible);
    assert_eq!(widget.width(), 25.0);
}

#[test]
fn test_each_visual_write_invalidates_once() {
    let counter = Rc::new(CountingApp::default());
    let app: Rc<dyn Application> = counter.clone();
    let mut widget = square(10.0);
    widget.attach_to(&app);

    widget.set_x(1.0).unwrap();
    widget.set_y(1.0).unwrap();
    widget.set_width(5.0).unwrap();
    widget.set_height(5.0).unwrap();
    widget.set_visibility(Visibility::Invisible);
    assert_eq!(counter.invalidations.get(), 5);

    widget.set_hit_test_enabled(false);
    widget.set_focusable(true);
    assert_eq!(counter.invalidations.get(), 5);
}

#[test]
fn test_detached_writes_are_silent() {
    let counter = Rc::new(CountingApp::default());
    let mut widget = square(10.0);

    widget.set_x(3.0).unwrap();
    widget.invalidate();
    widget.focus();
    assert_eq!(counter.invalidations.get(), 0);
    assert_eq!(counter.focused.get(), None);
}

#[test]
fn test_dropped_application_detaches() {
    let widget = square(10.0);
    {
        let app: Rc<dyn Application> = Rc::new(CountingApp::default());
        widget.attach_to(&app);
        assert!(widget.is_attached());
    }
    assert!(!widget.is_attached());
    widget.invalidate();
}

#[test]
fn test_focus_reaches_application() {
    let counter = Rc::new(CountingApp::default());
    let app: Rc<dyn Application> = counter.clone();
    let widget = square(10.0);
    widget.attach_to(&app);

    widget.focus();
    assert_eq!(counter.focused.get(), Some(widget.id()));
}

#[test]
fn test_event_registry_assignment_is_rejected() {
    let mut widget = square(10.0);
    for name in ["on_click", "on_pointer_down", "on_focus"] {
        let err = widget.assign(name, Value::Bool(true)).unwrap_err();
        assert!(matches!(err, PropertyError::ReadOnlyEvent { .. }));
        assert!(err.to_string().contains("add(handler)"));
    }
}

#[test]
fn test_handlers_run_in_subscription_order() {
    let widget = square(10.0);
    let order = Rc::new(std::cell::RefCell::new(Vec::new()));
    for tag in ["first", "second"] {
        let order = order.clone();
        widget.on_click().add(move |_| order.borrow_mut().push(tag));
    }

    widget.on_click().invoke(&tessera_ui::ClickEvent {
        position: Vec2::ZERO,
    });
    assert_eq!(*order.borrow(), vec!["first", "second"]);
}

#[test]
fn test_unknown_property_lands_in_attribute_bag() {
    let mut widget = square(10.0);
    assert_eq!(widget.lookup("tooltip"), Lookup::Missing);

    widget.assign("tooltip", Value::Number(3.0)).unwrap();
    assert_eq!(widget.read("tooltip"), Some(Value::Number(3.0)));
}

#[test]
fn test_clicking_button_in_tree() {
    tessera_core::init(&tessera_core::config::Config::default().with_log_filter("tessera_ui=trace"));
    let context = RootContext::new();
    let clicked = Rc::new(Cell::new(false));

    let button = widget_ref(
        Button::new(
            &Properties::new()
                .with("x", 10.0)
                .with("y", 10.0)
                .with("width", 80.0)
                .with("height", 20.0),
        )
        .unwrap(),
    );
    {
        let clicked = clicked.clone();
        button
            .borrow()
            .widget()
            .on_click()
            .add(move |_| clicked.set(true));
    }
    let root = Container::new(
        &Properties::new().with("width", 200.0).with("height", 200.0),
        vec![button.clone()],
    )
    .unwrap();
    context.attach(widget_ref(root));

    assert!(context.click(Vec2::new(50.0, 20.0)));
    assert!(clicked.get());
    assert_eq!(
        context.focused_widget(),
        Some(button.borrow().widget().id())
    );

    let mut canvas = tessera_ui::RecordingCanvas::new(200.0, 200.0);
    context.draw(&mut canvas);
    assert!(matches!(
        canvas.commands(),
        [tessera_ui::DrawCommand::Clear, tessera_ui::DrawCommand::Shape { .. }]
    ));
}
