use leptos::prelude::*;
use leptos_meta::*;
use wasm_bindgen::JsCast;

use crate::back_to_top::BackToTop;
use crate::clipboard::{CodeBlock, CopyStyles, InstallCopyButton, INSTALL_COMMAND};
use crate::nav::{scroll_to_anchor, Navbar};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="AutoTrend - Local Linear Trend Extraction for Time Series"/>
        <Meta
            name="description"
            content="Decompose time series into piecewise linear trends with a sliding-window regression ensemble. Install with pip, plot with one call."
        />

        <Navbar/>
        <main>
            <Hero/>
            <Features/>
            <Installation/>
            <Documentation/>
            <Examples/>
        </main>
        <Footer/>
        <BackToTop/>
        <CopyStyles/>
    }
}

/// Shared click handler for in-page anchors outside the navbar.
fn anchor_click(ev: leptos::ev::MouseEvent) {
    ev.prevent_default();
    if let Some(anchor) = ev
        .current_target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlAnchorElement>().ok())
    {
        scroll_to_anchor(&anchor.get_attribute("href").unwrap_or_default());
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <h1>"📈 AutoTrend"</h1>
            <p class="tagline">"Local Linear Trend Extraction for Time Series"</p>
            <p class="description">
                "Decompose a sequence into piecewise linear trends with a sliding-window "
                "regression ensemble. Iterative refinement finds the breakpoints for you."
            </p>
            <div class="cta">
                <a href="#installation" class="button primary" on:click=anchor_click>
                    "Get Started"
                </a>
                <a href="#docs" class="button" on:click=anchor_click>
                    "Documentation"
                </a>
            </div>
            <div class="install-box">
                <code>{INSTALL_COMMAND}</code>
                <InstallCopyButton/>
            </div>
            <img
                src="assets/hero_decomposition.png"
                alt="Full LLT decomposition of a sine wave with linear trend"
            />
        </section>
    }
}

#[component]
fn Features() -> impl IntoView {
    view! {
        <section id="features">
            <h2>"Why AutoTrend?"</h2>
            <div class="feature-grid">
                <div class="feature-card">
                    <h3>"🪟 Sliding-Window Ensemble"</h3>
                    <p>
                        "Short linear models are fit along the sequence, so local trends "
                        "emerge without choosing breakpoints up front."
                    </p>
                </div>
                <div class="feature-card">
                    <h3>"🔁 Iterative Refinement"</h3>
                    <p>
                        "Each round refits only the high-error segments, tightening the "
                        "trend estimate where the data disagrees most."
                    </p>
                </div>
                <div class="feature-card">
                    <h3>"📐 Trend Segments"</h3>
                    <p>
                        "Results come back as contiguous [start, end) ranges per "
                        "iteration, with slope and intercept for every model."
                    </p>
                </div>
                <div class="feature-card">
                    <h3>"📊 Rich Plotting"</h3>
                    <p>
                        "Error curves, slope comparisons, iteration grids, and full "
                        "decompositions, each one function call away."
                    </p>
                </div>
                <div class="feature-card">
                    <h3>"🧪 Data Generators"</h3>
                    <p>
                        "Built-in simple waves and piecewise linear sequences make it "
                        "easy to try the algorithm before bringing your own data."
                    </p>
                </div>
                <div class="feature-card">
                    <h3>"🪶 Lightweight"</h3>
                    <p>"NumPy and scikit-learn are the only runtime dependencies."</p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Installation() -> impl IntoView {
    view! {
        <section id="installation">
            <h2>"Installation"</h2>
            <div class="doc-section">
                <h3>"From PyPI"</h3>
                <CodeBlock code=INSTALL_COMMAND/>
            </div>
            <div class="doc-section">
                <h3>"From source"</h3>
                <CodeBlock code=INSTALL_FROM_SOURCE/>
            </div>
        </section>
    }
}

#[component]
fn Documentation() -> impl IntoView {
    view! {
        <section id="docs">
            <h2>"Documentation"</h2>
            <div class="doc-section">
                <h3>"decompose_llt"</h3>
                <p>
                    "Fits linear regressions on high-error segments identified via "
                    "sliding windows. Returns per-iteration predictions, filtered "
                    "errors, and focus ranges."
                </p>
                <CodeBlock code=DECOMPOSE_SIGNATURE/>
            </div>
            <div class="doc-section">
                <h3>"LLTResult"</h3>
                <p>
                    "The decomposition result bundles the fitted models with accessors "
                    "for segments and plots."
                </p>
                <CodeBlock code=RESULT_ACCESSORS/>
            </div>
        </section>
    }
}

#[component]
fn Examples() -> impl IntoView {
    view! {
        <section id="examples">
            <h2>"Quick Start"</h2>
            <div class="doc-section">
                <CodeBlock code=QUICK_START/>
            </div>
            <div class="doc-section">
                <h3>"Demo gallery"</h3>
                <p>
                    "The demo runner covers simple waves, piecewise linear sequences, "
                    "and non-stationary behavioral data."
                </p>
                <img src="assets/demo_simple_wave.png" alt="Simple wave decomposition"/>
                <img
                    src="assets/demo_piecewise_linear.png"
                    alt="Piecewise linear decomposition"
                />
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer>
            <p>"AutoTrend - trend extraction without the tuning marathon"</p>
            <p>
                <a href="https://github.com/chotanansub/autotrend">"GitHub"</a>
                " · "
                <a href="https://pypi.org/project/autotrend/">"PyPI"</a>
            </p>
        </footer>
    }
}

const INSTALL_FROM_SOURCE: &str = r#"git clone https://github.com/chotanansub/autotrend.git
cd autotrend
pip install -e ."#;

const DECOMPOSE_SIGNATURE: &str = r#"decompose_llt(
    seq,                  # 1D input sequence
    max_models=10,        # maximum number of refinement rounds
    window_size=5,        # length of each training window
    error_percentile=40,  # initial percentile threshold for high errors
    percentile_step=0,    # threshold increase per round
)"#;

const RESULT_ACCESSORS: &str = r#"result.models                  # fitted LinearRegression models
result.get_num_iterations()    # refinement rounds executed
result.get_trend_segments()    # [(start, end, iteration), ...]
result.plot_full_decomposition()
result.plot_all(output_dir="results", show=False)"#;

const QUICK_START: &str = r#"import numpy as np
from autotrend import decompose_llt, generate_simple_wave

# Generate a sine wave with a linear trend
sequence = generate_simple_wave(length=500, add_noise=False)

# Run LLT decomposition with default parameters
result = decompose_llt(seq=sequence)

for start, end, iteration in result.get_trend_segments():
    print(f"[{start:4d}, {end:4d}) -> iteration {iteration}")

result.plot_full_decomposition()"#;
