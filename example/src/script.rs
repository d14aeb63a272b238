use std::{sync::Arc, time::Duration};

use slide_confirm::{
    ConfirmAction, ConfirmOutcome, ConfirmTask, DragEnd, Environment, LayoutDirection,
    SlideConfirm, SlideConfirmStyle, accesskit::Action, render::ViewRenderer,
};
use tracing::{info, warn};

use crate::{DemoError, TextRenderer, haptics::TracingHaptics};

const TRACK_WIDTH: f32 = 300.0;
const ACTION_LATENCY: Duration = Duration::from_millis(300);

/// Plays a fixed sequence of gestures against one control.
pub(crate) async fn session(style: SlideConfirmStyle) -> Result<(), DemoError> {
    let action = ConfirmAction::new(|| async {
        tokio::time::sleep(ACTION_LATENCY).await;
        Some(ConfirmOutcome::Success)
    });
    let button = SlideConfirm::new("Slide to confirm".to_string(), action)
        .style(style)
        .haptics(Arc::new(TracingHaptics));
    let mut renderer = TextRenderer::default();
    let env = Environment::new(TRACK_WIDTH);

    frame(&mut renderer, &button, &env, "idle");

    info!("short drag");
    if button.drag_started(20.0, &env) {
        button.drag_changed(80.0, &env);
        frame(&mut renderer, &button, &env, "short drag");
        finish(&mut renderer, &button, &env, button.drag_ended(80.0, None, &env)).await?;
    }

    info!("full drag");
    if button.drag_started(20.0, &env) {
        for translation in [60.0, 120.0, 180.0, 240.0] {
            button.drag_changed(translation, &env);
            frame(&mut renderer, &button, &env, "dragging");
        }
        finish(&mut renderer, &button, &env, button.drag_ended(240.0, None, &env)).await?;
    }

    info!("fling");
    if button.drag_started(20.0, &env) {
        button.drag_changed(90.0, &env);
        let end = button.drag_ended(90.0, Some(420.0), &env);
        finish(&mut renderer, &button, &env, end).await?;
    }

    info!("accessibility click");
    let task = button.perform_accessibility_action(Action::Click, &env);
    run(&mut renderer, &button, &env, task).await?;

    info!("disabled");
    let disabled = Environment::new(TRACK_WIDTH).enabled(false);
    if button.drag_started(20.0, &disabled) {
        warn!("disabled control accepted a drag");
    }
    frame(&mut renderer, &button, &disabled, "disabled");

    info!("right to left");
    let rtl = Environment::new(TRACK_WIDTH).layout_direction(LayoutDirection::RightToLeft);
    frame(&mut renderer, &button, &rtl, "rtl idle");
    if button.drag_started(TRACK_WIDTH - 20.0, &rtl) {
        // Physical translations: the leading edge is on the right.
        button.drag_changed(150.0, &rtl);
        frame(&mut renderer, &button, &rtl, "rtl wrong way");
        button.drag_changed(-150.0, &rtl);
        frame(&mut renderer, &button, &rtl, "rtl dragging");
        finish(&mut renderer, &button, &rtl, button.drag_ended(-250.0, None, &rtl)).await?;
    }

    Ok(())
}

fn frame(renderer: &mut TextRenderer, button: &SlideConfirm, env: &Environment, step: &str) {
    let line = renderer.render(&button.view(env));
    println!("{step:>14} {line}");
}

async fn finish(
    renderer: &mut TextRenderer,
    button: &SlideConfirm,
    env: &Environment,
    end: DragEnd,
) -> Result<(), DemoError> {
    if !end.is_confirmed() {
        frame(renderer, button, env, "released");
        return Ok(());
    }
    run(renderer, button, env, end.into_task()).await
}

async fn run(
    renderer: &mut TextRenderer,
    button: &SlideConfirm,
    env: &Environment,
    task: Option<ConfirmTask>,
) -> Result<(), DemoError> {
    let Some(task) = task else {
        frame(renderer, button, env, "ignored");
        return Ok(());
    };
    let handle = tokio::spawn(task);
    frame(renderer, button, env, "confirmed");
    let outcome = handle.await?;
    info!(?outcome, "action finished");
    frame(renderer, button, env, "reset");
    Ok(())
}
