//! # mipgen
//!
//! Generates the Android icon resource tree for a packaged app: launcher,
//! adaptive, and notification icons, fanned out across every density bucket,
//! plus the XML bindings that wire the adaptive background up.
//!
//! The input is the app's manifest (its `app.json`, or the hosted manifest a
//! build service receives). The output is a populated `res/` directory:
//!
//! ```text
//! res/
//! ├── mipmap-mdpi/ic_launcher.png          # legacy launcher, base 48
//! ├── mipmap-xhdpi/ic_launcher.png         # ...one per density bucket
//! ├── mipmap-mdpi-v26/ic_foreground.png    # adaptive layers, base 108,
//! ├── mipmap-mdpi-v26/ic_background.png    #   version-gated folders
//! ├── mipmap-mdpi-v26/ic_launcher.xml      # rewritten to bind the background
//! ├── drawable-mdpi/shell_notification_icon.png   # base 24
//! └── values/colors.xml                    # literal background color binding
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`manifest`] | serde types for the icon-related manifest fields |
//! | [`context`] | strict (service) vs. best-effort (detached) run modes |
//! | [`resolver`] | normalizes both manifest shapes into tagged source locators |
//! | [`density`] | the five density buckets and resource subfolder naming |
//! | [`fetch`] | saves a source locator to a staging file (HTTP or local copy) |
//! | [`imaging`] | resize and measure, behind the [`imaging::ImageTool`] trait |
//! | [`fanout`] | copies and scales one source into every bucket, in parallel |
//! | [`xml`] | placeholder substitution in generated XML fragments |
//! | [`sweep`] | removes the previous run's artifacts before regeneration |
//! | [`pipeline`] | orchestration, error taxonomy, and [`pipeline::write_icons`] |
//!
//! # Design Decisions
//!
//! ## Two Run Contexts, One Pipeline
//!
//! The same code serves a build service (hosted manifests, URL sources, every
//! failure fatal) and the local detach flow (local manifests, path sources,
//! known platform gaps tolerated). The context is decided once by the caller;
//! inside the pipeline it only surfaces in the failure policy and in which
//! manifest fields the resolver reads.
//!
//! ## External Resize, In-Process Measurement
//!
//! Scaling delegates to the OS image tool (`sips`), which the build hosts
//! guarantee but developer machines may lack; that gap is a first-class,
//! recoverable condition rather than a panic. Dimension checks only need the
//! image header, so they use `image::image_dimensions` in process and work
//! everywhere.
//!
//! ## Sweep Before Generate
//!
//! Every icon family removes its previous artifacts before regenerating, and
//! a run without an adaptive foreground clears the version-gated folders
//! entirely. Running the pipeline twice with different manifests converges to
//! the second manifest's resource tree; nothing stale survives.
//!
//! # Concurrency
//!
//! Bucket operations within one fan-out write to disjoint destination paths
//! and run on rayon's pool, joined before the staging file is removed. The
//! pipeline itself assumes a single writer per resource tree; two concurrent
//! runs against the same `res/` are not supported.

pub mod context;
pub mod density;
pub mod fanout;
pub mod fetch;
pub mod imaging;
pub mod manifest;
pub mod pipeline;
pub mod resolver;
pub mod sweep;
pub mod xml;

#[cfg(test)]
pub(crate) mod test_helpers;
