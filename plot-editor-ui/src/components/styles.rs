pub const EDITOR_STYLES: &str = r#"
/* Panel */
.panel__content {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    padding: 0.75rem;
    background: var(--panel-bg, #f8fafc);
    color: var(--text-primary, #1e293b);
    font-size: 0.8125rem;
}

.panel__header {
    display: flex;
    align-items: center;
    justify-content: flex-end;
    padding-bottom: 0.5rem;
    border-bottom: 1px solid var(--border-color, #e2e8f0);
}

.panel__add-button {
    padding: 0.25rem 0.75rem;
    background: var(--accent-bg, #3b82f6);
    color: white;
    border: none;
    border-radius: var(--radius-sm, 4px);
    cursor: pointer;
    font-weight: 600;
}

/* Fold */
.fold {
    border: 1px solid var(--border-color, #e2e8f0);
    border-radius: var(--radius-sm, 4px);
    background: var(--fold-bg, white);
}

.fold__top {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 0.75rem;
    cursor: pointer;
    user-select: none;
    background: var(--fold-top-bg, #f1f5f9);
}

.fold__top--folded {
    border-bottom: none;
}

.fold__title {
    flex: 1;
    font-weight: 600;
}

.fold__delete {
    background: none;
    border: none;
    color: var(--text-secondary, #64748b);
    cursor: pointer;
    font-size: 1rem;
}

.fold__content {
    padding: 0.75rem;
}

/* Field */
.field {
    display: flex;
    align-items: center;
    gap: 0.75rem;
}

.field__title {
    width: 6rem;
    color: var(--text-secondary, #64748b);
}

/* Color picker */
.colorpicker-container {
    position: relative;
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

.colorpicker-swatch {
    width: 1.5rem;
    height: 1.5rem;
    border: 1px solid var(--border-color, #cbd5e1);
    border-radius: var(--radius-sm, 4px);
}

.\+cursor-clickable {
    cursor: pointer;
}

.colorpicker-selected-color {
    font-family: monospace;
    cursor: pointer;
}

.\+hover-grey:hover {
    color: var(--text-secondary, #64748b);
}

.pro-badge {
    padding: 0 0.375rem;
    border-radius: 999px;
    background: var(--pro-bg, #f59e0b);
    color: white;
    font-size: 0.625rem;
    font-weight: 700;
    letter-spacing: 0.05em;
}

.--inline-margin {
    margin: 0 0.25rem;
}

.color-picker__popover {
    position: absolute;
    top: 2rem;
    left: 0;
    z-index: 20;
}

.color-picker__cover {
    position: fixed;
    inset: 0;
}

.tiered-color-picker {
    position: relative;
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    width: 14rem;
    padding: 0.625rem;
    background: white;
    border-radius: var(--radius-md, 8px);
    box-shadow: 0 4px 16px rgba(15, 23, 42, 0.2);
}

.tiered-color-picker__presets {
    display: grid;
    grid-template-columns: repeat(8, 1fr);
    gap: 0.25rem;
}

.tiered-color-picker__preset {
    position: relative;
    aspect-ratio: 1;
    border: 1px solid var(--border-color, #cbd5e1);
    border-radius: 3px;
    cursor: pointer;
    padding: 0;
}

.tiered-color-picker__preset--locked {
    opacity: 0.6;
}

.tiered-color-picker__lock {
    font-size: 0.5rem;
}

.tiered-color-picker__fields {
    display: flex;
    align-items: center;
    gap: 0.375rem;
}

.tiered-color-picker__channel {
    display: flex;
    flex-direction: column;
    font-size: 0.6875rem;
}

.tiered-color-picker__channel input {
    width: 3rem;
}

/* Demo shell */
.editor-toolbar {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    padding: 0.5rem 0.75rem;
    border-bottom: 1px solid var(--border-color, #e2e8f0);
}

.upgrade-notice {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0.5rem 0.75rem;
    background: var(--warning-bg, #fef3c7);
    color: var(--warning-text, #92400e);
}
"#;
