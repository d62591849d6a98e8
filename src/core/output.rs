//! Unified output formatting utilities for consistent CLI presentation.
//!
//! This module provides standardized formatting functions for all git-anchors
//! output, ensuring consistent colors, spacing, and message structure across
//! commands.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, green for success
//! - **Standardized spacing**: Newline before and after command outputs
//! - **User-friendly formatting**: Clear visual hierarchy and readable output

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a success message with consistent styling
///
/// # Format
/// ```text
///
/// ✓ <message>
/// ```
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Formats and prints an informational message with consistent styling
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Formats and prints a section header with consistent styling
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}
