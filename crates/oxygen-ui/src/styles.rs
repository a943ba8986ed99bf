//! Widget stylesheet injected by the demo.
//!
//! Rules only read `--oxy-*` custom properties; the values come from the
//! theme rules rendered by [`ThemeConfig::render_all`].

use oxygen_core::ThemeConfig;

/// Selector of the containers that carry `data-theme`.
pub const PANE_SELECTOR: &str = ".oxy-pane";

/// Structural widget rules.
pub const BASE_CSS: &str = r"
.oxy-pane { padding: 24px; display: flex; flex-direction: column; gap: 16px; }
.oxy-pane[data-theme='light'] { background: white; color: #243333; }
.oxy-pane[data-theme='dark'] { background: #1b2626; color: white; }

.oxy-button {
  display: inline-flex; align-items: center; gap: 6px; padding: 6px 12px;
  border: none; border-radius: 4px; background: var(--oxy-button-background);
  color: inherit; cursor: pointer; user-select: none;
}
.oxy-button.raised { background: var(--oxy-button-raised-background); }
.oxy-button:focus-visible { outline: 2px solid var(--oxy-button-focus-color); }
.oxy-button.disabled { opacity: 0.5; cursor: default; }

.oxy-checkbox {
  display: inline-flex; width: 18px; height: 18px; border-radius: 3px;
  border: var(--oxy-checkbox-unchecked-border);
  background: var(--oxy-checkbox-unchecked-background);
  color: var(--oxy-checkbox-check-color); cursor: pointer;
}
.oxy-checkbox.checked, .oxy-checkbox.indeterminate {
  border: var(--oxy-checkbox-checked-border);
  background: var(--oxy-checkbox-checked-background);
}
.oxy-checkbox:focus-visible { outline: 2px solid var(--oxy-checkbox-focus-color); }

.oxy-input-field { display: inline-flex; align-items: center; gap: 6px; cursor: text; }
.oxy-input-field .oxy-icon { width: 18px; height: 18px; color: var(--oxy-input-placeholder-color); }
.oxy-input {
  padding: 6px 8px; border-radius: 4px; color: inherit;
  background: var(--oxy-input-background); border: var(--oxy-input-border);
}
.oxy-input.focused {
  background: var(--oxy-input-background-focused);
  border: var(--oxy-input-border-focused);
}
.oxy-input::placeholder { color: var(--oxy-input-placeholder-color); }

.oxy-textarea {
  padding: 6px 8px; border-radius: 4px; color: inherit; resize: vertical;
  background: var(--oxy-textarea-background); border: var(--oxy-textarea-border);
}
.oxy-textarea.focused {
  background: var(--oxy-textarea-background-focused);
  border: var(--oxy-textarea-border-focused);
}
.oxy-textarea::placeholder { color: var(--oxy-textarea-placeholder-color); }
.oxy-textarea::-webkit-scrollbar-track { background: var(--oxy-scrollbar-track-color); }
.oxy-textarea::-webkit-scrollbar-thumb { background: var(--oxy-scrollbar-thumb-color); }
.oxy-textarea::-webkit-scrollbar-thumb:hover { background: var(--oxy-scrollbar-thumb-hover-color); }

.oxy-slider { position: relative; height: 24px; cursor: pointer; touch-action: none; }
.oxy-slider:focus-visible { outline: 2px solid var(--oxy-slider-focus-color); }
.oxy-slider .track {
  position: absolute; left: 0; right: 0; top: 50%;
  height: var(--oxy-slider-track-height); background: var(--oxy-slider-track-color);
}
.oxy-slider .fill { height: 100%; background: var(--oxy-slider-track-active-color); }
.oxy-slider .thumb {
  position: absolute; top: 50%; transform: translate(-50%, -50%);
  width: var(--oxy-slider-thumb-size); height: var(--oxy-slider-thumb-size);
  border-radius: var(--oxy-slider-thumb-radius); background: var(--oxy-slider-thumb-color);
}
.oxy-slider.dragging .thumb { background: var(--oxy-slider-thumb-active-color); }
.oxy-slider.disabled { opacity: 0.5; cursor: default; }

.oxy-tabs { display: flex; border-bottom: var(--oxy-tabs-border); }
.oxy-tabs[orientation='vertical'] {
  flex-direction: column; border-bottom: none; border-right: var(--oxy-tabs-border);
}
.oxy-tab { padding: 8px 16px; cursor: pointer; border-bottom: 2px solid transparent; }
.oxy-tab.selected { border-bottom-color: var(--oxy-tab-indicator-color); }

.oxy-dialog {
  position: fixed; inset: 0; display: none; align-items: center; justify-content: center;
}
.oxy-dialog.opened { display: flex; }
.oxy-dialog.backdrop { background: var(--oxy-dialog-backdrop); }
.oxy-dialog .surface {
  min-width: 280px; padding: 24px; border-radius: 6px; background: var(--oxy-dialog-background);
}

.oxy-icon { width: 24px; height: 24px; fill: currentColor; }
.oxy-icon-showcase { display: grid; grid-template-columns: repeat(auto-fill, minmax(96px, 1fr)); gap: 12px; }
.oxy-icon-showcase figure { margin: 0; display: flex; flex-direction: column; align-items: center; }
.oxy-icon-showcase figcaption { font-size: 11px; color: var(--oxy-icon-name-color); }
";

/// Theme rules for both modes followed by [`BASE_CSS`].
#[must_use]
pub fn document_stylesheet(config: &ThemeConfig) -> String {
    format!("{}\n{BASE_CSS}", config.render_all(PANE_SELECTOR))
}
