//! # Presentation Layer
//!
//! This module implements the **User Interface** logic for the CLI.
//! It is designed using an adaptation of the **MVVM (Model-View-ViewModel)**
//! pattern to ensure strict separation between the Domain Logic
//! (`tokendeck_engine`) and the Output Logic.
//!
//! ## Architecture & Data Flow
//!
//! The data flow is strictly unidirectional:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> [ Output ]
//!    (Controller)      (Converter)       (Contract)       (View)        (Console/JSON)
//! ```
//!
//! ## Golden Rules
//!
//! ### 1. The JSON Test (Raw Data Strategy)
//! **ViewModel must contain "Raw Data", not "Formatted Strings".**
//! * Bad: `struct Vm { price: "$3,245.67" }`
//! * Good: `struct Vm { price: f64 }`
//! * **Reason:** JSON output is an API. Clients need numbers, not strings.
//!
//! ### 2. The Schema Stability Rule
//! `--format json` always dumps the complete `CommandResultViewModel`;
//! only the text rendering applies layout, styling, and formatting.
//!
//! ## Directory Guide: Where does code go?
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a new field to the JSON output | `view_models/` |
//! | Calculate a sum, average, or diff | `presenters/` |
//! | Decide *when* to show a "Guidance" | `presenters/` |
//! | Change the color of a value | `view_models/` (`fmt::Display`) or `renderers/tui/` |
//! | Format a price as "$1.25B" | `formatters/` |
//! | Handle keyboard input for the dashboard | `renderers/tui/` |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;

// Re-exports for convenience
pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel};
