//! Builds a small widget tree, clicks a button and prints the recorded draw
//! commands.
//!
//! Run with `RUST_LOG=tessera_ui=debug` to see focus and invalidation logs.

use std::rc::Rc;
use tessera_core::config::Config;
use tessera_core::math::Vec2;
use tessera_ui::property::Properties;
use tessera_ui::widgets::{AppBar, Button, Container};
use tessera_ui::{
    Application, Element, PropertyResult, RecordingCanvas, RootContext, Theme, widget_ref,
};

fn main() -> PropertyResult<()> {
    tessera_core::init(&Config::default());

    let app = RootContext::with_theme(Theme::dark());

    let app_bar = AppBar::new(&Properties::new().with("width", 640.0).with("height", 56.0))?;
    let button = Button::new(
        &Properties::new()
            .with("x", 16.0)
            .with("y", 80.0)
            .with("width", 120.0)
            .with("height", 36.0),
    )?;
    button.widget().on_click().add(|event| {
        tracing::info!(x = event.position.x, y = event.position.y, "button clicked");
    });

    let button = widget_ref(button);
    let root = Container::new(
        &Properties::new().with("width", 640.0).with("height", 480.0),
        vec![widget_ref(app_bar), Rc::clone(&button)],
    )?;
    app.attach(widget_ref(root));

    app.click(Vec2::new(40.0, 90.0));
    println!("focused: {:?}", app.focused_widget());

    let mut canvas = RecordingCanvas::new(640.0, 480.0);
    app.draw(&mut canvas);
    for command in canvas.commands() {
        println!("{command:?}");
    }
    println!("invalidations: {}", app.invalidation_count());
    Ok(())
}
