//! # number-balance
//!
//! A number balancing puzzle. Each side of a beam gets six numbers;
//! combine pairs of them with `+ - * /` and try to make both sides'
//! totals equal, and as high as possible.
//!
//! ## Design Principles
//!
//! 1. **Exact arithmetic**: results are reduced fractions, so a balance
//!    check is an exact comparison even after divisions.
//!
//! 2. **Permissive input**: picking a third number or committing an
//!    incomplete expression is ignored, not an error.
//!
//! 3. **Injected collaborators**: the session receives its tour
//!    controller, settings store and share target; nothing is global.
//!
//! ## Modules
//!
//! - `core`: Sides, identifiers, exact values, RNG, configuration
//! - `game`: Token pools, selection, operations, totals, balance check
//! - `tour`: Guided tour sequencing and tooltip placement
//! - `settings`: The two persisted flags and their key-value store
//! - `share`: Platform share boundary
//! - `session`: Wiring for one play session

pub mod core;
pub mod game;
pub mod tour;
pub mod settings;
pub mod share;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    BalanceConfig, GameRng, IdAllocator, OperationId, Side, SideMap, TokenId, Value,
};

pub use crate::game::{
    Action, ActionRecord, BalanceCheck, BalanceError, BalanceGame, Completion, GamePhase,
    Operation, Operator, SelectOutcome, Selection, Token, Verdict,
};

pub use crate::tour::{
    default_steps, Placement, Rect, TourControl, TourFocus, TourSequencer, TourStep, UiLocator,
    Viewport,
};

pub use crate::settings::{JsonFileStore, KeyValueStore, MemoryStore, Settings, SettingsError};

pub use crate::share::{SharePayload, ShareError, ShareTarget};

pub use crate::session::{CheckOutcome, Session, SessionOptions};
