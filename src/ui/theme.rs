//! Color theme constants for the inflight UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

// ============================================================================
// Request States
// ============================================================================

/// Loading spinner
pub const COLOR_LOADING: Color = Color::Yellow;

/// Request still waiting on the server
pub const COLOR_PENDING: Color = Color::Gray;

/// Request finished successfully - green #04B575
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117);

/// Request failed
pub const COLOR_ERROR: Color = Color::Red;

/// Request was cancelled
pub const COLOR_CANCELLED: Color = Color::Magenta;
