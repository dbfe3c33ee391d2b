use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use leptos::leptos_dom::helpers::{document, set_timeout_with_handle, window, TimeoutHandle};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// The literal command copied by the install box trigger.
pub const INSTALL_COMMAND: &str = "pip install autotrend";

/// How long a copy control shows its confirmation state before reverting.
pub const FEEDBACK_WINDOW: Duration = Duration::from_millis(2000);

/// Confirmation tint applied to code block copy controls.
pub const FEEDBACK_COLOR: &str = "#10b981";

/// Icon for a copy control in the given feedback state.
pub fn icon_class(copied: bool) -> &'static str {
    if copied {
        "fas fa-check"
    } else {
        "fas fa-copy"
    }
}

/// Pending feedback reset for one copy control. Restarted on every click so
/// the last click always owns the full feedback window.
type FeedbackTimer = StoredValue<Option<TimeoutHandle>, LocalStorage>;

/// Writes `text` to the system clipboard.
///
/// Tries the asynchronous clipboard API first and falls back to the legacy
/// selection-based technique when the API is missing or rejects the write.
async fn write_text(text: &str) -> Result<()> {
    let clipboard = window().navigator().clipboard();
    if clipboard.is_undefined() {
        return fallback_copy(text);
    }
    match JsFuture::from(clipboard.write_text(text)).await {
        Ok(_) => Ok(()),
        Err(err) => {
            log::error!("clipboard write rejected: {err:?}");
            fallback_copy(text)
        }
    }
}

/// Legacy copy technique: an off-screen textarea is selected, the platform
/// copy command invoked, and the textarea removed again.
fn fallback_copy(text: &str) -> Result<()> {
    let doc = document();
    let body = doc.body().context("document has no body")?;

    let textarea: web_sys::HtmlTextAreaElement = doc
        .create_element("textarea")
        .map_err(|err| anyhow!("failed to create textarea: {err:?}"))?
        .unchecked_into();
    textarea.set_value(text);
    let _ = web_sys::HtmlElement::style(&textarea).set_property("position", "fixed");
    let _ = web_sys::HtmlElement::style(&textarea).set_property("left", "-9999px");

    body.append_child(&textarea)
        .map_err(|err| anyhow!("failed to attach textarea: {err:?}"))?;
    textarea.select();

    let copied = doc
        .unchecked_into::<web_sys::HtmlDocument>()
        .exec_command("copy");
    let _ = body.remove_child(&textarea);

    match copied {
        Ok(true) => Ok(()),
        Ok(false) => Err(anyhow!("copy command refused")),
        Err(err) => Err(anyhow!("copy command failed: {err:?}")),
    }
}

/// Starts (or restarts) the feedback window for one copy control.
fn show_feedback(set_copied: WriteSignal<bool>, pending: FeedbackTimer) {
    set_copied.set(true);
    if let Some(previous) = pending.get_value() {
        previous.clear();
    }
    match set_timeout_with_handle(move || set_copied.set(false), FEEDBACK_WINDOW) {
        Ok(handle) => pending.set_value(Some(handle)),
        Err(err) => log::error!("failed to schedule feedback reset: {err:?}"),
    }
}

/// Copy trigger for the hero install box.
///
/// On success the icon swaps to a checkmark and the button carries the
/// `copied` class for the feedback window, then reverts. On failure the error
/// is logged and the button is left unchanged.
#[component]
pub fn InstallCopyButton() -> impl IntoView {
    let (copied, set_copied) = signal(false);
    let pending: FeedbackTimer = StoredValue::new_local(None);

    let on_click = move |_| {
        spawn_local(async move {
            match write_text(INSTALL_COMMAND).await {
                Ok(()) => show_feedback(set_copied, pending),
                Err(err) => log::error!("failed to copy install command: {err:#}"),
            }
        });
    };

    view! {
        <button
            class="install-copy-btn"
            class:copied=move || copied.get()
            title="Copy to clipboard"
            on:click=on_click
        >
            <i class=move || icon_class(copied.get())></i>
        </button>
    }
}

/// A pre-formatted code block with a hover-revealed copy control.
///
/// The control copies the block's text with the same contract as the install
/// trigger, confirming with a green-tinted checkmark instead of a class.
#[component]
pub fn CodeBlock(
    /// Code displayed in the block and written to the clipboard.
    code: &'static str,
) -> impl IntoView {
    let (copied, set_copied) = signal(false);
    let pending: FeedbackTimer = StoredValue::new_local(None);

    let on_click = move |_| {
        spawn_local(async move {
            match write_text(code).await {
                Ok(()) => show_feedback(set_copied, pending),
                Err(err) => log::error!("failed to copy code block: {err:#}"),
            }
        });
    };

    view! {
        <pre>
            <code>{code}</code>
            <button
                class="copy-button"
                title="Copy to clipboard"
                style:color=move || if copied.get() { FEEDBACK_COLOR } else { "" }
                on:click=on_click
            >
                <i class=move || icon_class(copied.get())></i>
            </button>
        </pre>
    }
}

/// Shared style fragment for the injected copy controls, revealed on hover.
#[component]
pub fn CopyStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            pre {
                position: relative;
            }

            .copy-button {
                position: absolute;
                top: 10px;
                right: 10px;
                background-color: rgba(255, 255, 255, 0.1);
                border: 1px solid rgba(255, 255, 255, 0.2);
                color: #e2e8f0;
                padding: 0.5rem 0.75rem;
                border-radius: 6px;
                cursor: pointer;
                font-size: 0.9rem;
                transition: all 0.3s;
                opacity: 0;
            }

            pre:hover .copy-button {
                opacity: 1;
            }

            .copy-button:hover {
                background-color: rgba(255, 255, 255, 0.2);
                border-color: rgba(255, 255, 255, 0.3);
            }

            .copy-button:active {
                transform: scale(0.95);
            }

            .install-copy-btn.copied {
                color: #10b981;
            }
            "#
        </style>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_command_literal() {
        assert_eq!(INSTALL_COMMAND, "pip install autotrend");
    }

    #[test]
    fn test_feedback_window_is_two_seconds() {
        assert_eq!(FEEDBACK_WINDOW, Duration::from_millis(2000));
    }

    #[test]
    fn test_icon_class_per_state() {
        assert_eq!(icon_class(false), "fas fa-copy");
        assert_eq!(icon_class(true), "fas fa-check");
    }
}
