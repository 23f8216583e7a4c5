//! Application state and logic.

use crate::error::DescartesError;
use crate::expr::parse_statement;
use crate::graph::GraphScene;
use crate::input::InputField;
use crate::plot::{render_graphs, PlotSurface};
use crate::range::XRange;
use crate::store::FunctionList;
use crate::util;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Which input field owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The function entry field.
    Expression,
    /// The x-range entry field.
    Range,
}

impl Focus {
    /// Get the next field in the cycle.
    pub fn next(self) -> Self {
        match self {
            Focus::Expression => Focus::Range,
            Focus::Range => Focus::Expression,
        }
    }
}

/// Kind of modal dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    /// Confirmation message.
    Info,
    /// Error message.
    Error,
}

/// A modal dialog blocking input until dismissed.
#[derive(Debug, Clone)]
pub struct Dialog {
    /// Dialog kind.
    pub kind: DialogKind,
    /// Dialog title.
    pub title: String,
    /// Dialog body text.
    pub message: String,
}

impl Dialog {
    /// Create a confirmation dialog.
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Create an error dialog titled "Error".
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Error,
            title: "Error".to_string(),
            message: message.into(),
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Stored functions.
    pub functions: FunctionList,
    /// Function entry field.
    pub expression_input: InputField,
    /// X-range entry field.
    pub range_input: InputField,
    /// Focused field.
    pub focus: Focus,
    /// Rendered graph scene.
    pub scene: GraphScene,
    /// Open modal dialog, if any.
    pub dialog: Option<Dialog>,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
}

impl App {
    /// Create a new application instance.
    pub fn new() -> Self {
        Self {
            functions: FunctionList::new(),
            expression_input: InputField::new(),
            range_input: InputField::with_value("-10, 10"),
            focus: Focus::Expression,
            scene: GraphScene::new(),
            dialog: None,
            status: "Ready".to_string(),
            theme: Theme::GruvboxDark,
        }
    }

    /// Validate the function field and append the function to the list.
    pub fn add_function(&mut self) {
        let raw = self.expression_input.value().trim().to_string();
        if raw.is_empty() {
            self.dialog = Some(Dialog::error("Please enter a valid function."));
            return;
        }

        match parse_statement(&raw) {
            Ok(expr) => {
                let label = self.functions.add(expr);
                self.expression_input.clear();
                self.dialog = Some(Dialog::info(
                    "Added",
                    format!("Function '{}' added.", raw),
                ));
                self.status = format!("{} function(s) stored", self.functions.len());
                tracing::info!("Added function: {}", label);
            },
            Err(e) => {
                self.dialog = Some(Dialog::error(e.to_string()));
                tracing::warn!("Rejected function input '{}': {}", raw, e);
            },
        }
    }

    /// Plot every stored function over the configured range.
    pub fn plot_graphs(&mut self) {
        // The empty-list dialog takes precedence over a bad range.
        if self.functions.is_empty() {
            self.dialog = Some(Dialog::error(DescartesError::EmptyInput.to_string()));
            return;
        }

        let range = match XRange::parse(self.range_input.value()) {
            Ok(range) => range,
            Err(e) => {
                self.dialog = Some(Dialog::error(e.to_string()));
                return;
            },
        };

        match render_graphs(&self.functions, range, &mut self.scene) {
            Ok(report) => {
                if !report.errors.is_empty() {
                    let message = report
                        .errors
                        .iter()
                        .map(|e| e.to_string())
                        .collect::<Vec<_>>()
                        .join("\n");
                    self.dialog = Some(Dialog::error(message));
                }
                self.status = format!("Plotted {} function(s)", report.drawn);
            },
            Err(e) => {
                self.dialog = Some(Dialog::error(e.to_string()));
                self.status = "Plot failed".to_string();
            },
        }
    }

    /// Drop all stored functions and reset the graph.
    pub fn clear_functions(&mut self) {
        self.functions.clear();
        self.scene.clear();
        self.status = "Functions cleared".to_string();
        tracing::info!("Cleared function list");
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Move focus to the other input field.
    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
    }

    /// Copy the function list to the clipboard.
    pub fn copy_function_list(&mut self) {
        if self.functions.is_empty() {
            self.status = "No functions to copy".to_string();
            return;
        }
        match util::copy_function_list(&self.functions) {
            Ok(_) => self.status = "Function list copied!".to_string(),
            Err(e) => self.status = format!("Copy failed: {}", e),
        }
    }

    /// Copy the sampled plot data to the clipboard.
    pub fn copy_plot_data(&mut self) {
        if !self.scene.visible || self.scene.curves.is_empty() {
            self.status = "No plot data to copy".to_string();
            return;
        }
        match util::copy_plot_data(&self.scene) {
            Ok(_) => self.status = "Plot data copied!".to_string(),
            Err(e) => self.status = format!("Copy failed: {}", e),
        }
    }

    /// Dismiss the open dialog.
    pub fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }

    /// Get the focused input field.
    pub fn focused_input_mut(&mut self) -> &mut InputField {
        match self.focus {
            Focus::Expression => &mut self.expression_input,
            Focus::Range => &mut self.range_input,
        }
    }

    /// Submit the focused field: add on the function field, plot on the
    /// range field.
    pub fn submit_focused(&mut self) {
        match self.focus {
            Focus::Expression => self.add_function(),
            Focus::Range => self.plot_graphs(),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
