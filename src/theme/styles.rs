//! Global CSS styles for AetherFlow.
//!
//! Frosted glass panels over a full-window particle canvas.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SPACE (Backgrounds) */
  --deep-space: #02020a;
  --glass: rgba(255, 255, 255, 0.06);
  --glass-strong: rgba(255, 255, 255, 0.1);
  --glass-border: rgba(255, 255, 255, 0.12);

  /* CYAN (Interaction) */
  --cyan: #00f2ff;
  --cyan-glow: rgba(0, 242, 255, 0.35);

  /* VIOLET (AI) */
  --violet: #7000ff;
  --violet-glow: rgba(112, 0, 255, 0.45);

  /* TEXT */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.45);

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  width: 100%;
  height: 100%;
  overflow: hidden;
  background: var(--deep-space);
  color: var(--text-primary);
  font-family: var(--font-sans);
  -webkit-font-smoothing: antialiased;
}

.aether-root {
  position: fixed;
  inset: 0;
}

/* === Canvas === */
.particle-canvas {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  background: radial-gradient(ellipse at center, #0b0b24 0%, var(--deep-space) 70%);
}

.particle-canvas circle {
  mix-blend-mode: screen;
}

/* === Glass Panels === */
.glass-panel {
  position: absolute;
  padding: 1rem 1.25rem;
  background: var(--glass);
  border: 1px solid var(--glass-border);
  border-radius: 1rem;
  backdrop-filter: blur(14px);
  -webkit-backdrop-filter: blur(14px);
  box-shadow: 0 8px 32px rgba(0, 0, 0, 0.45);
}

.anchor-top-left { top: 1.25rem; left: 1.25rem; }
.anchor-top-right { top: 1.25rem; right: 1.25rem; }
.anchor-bottom-right { bottom: 1.25rem; right: 1.25rem; }
.anchor-bottom-center {
  bottom: 1.25rem;
  left: 50%;
  transform: translateX(-50%);
  width: min(640px, 90vw);
}

.panel-title {
  font-family: var(--font-mono);
  font-size: 0.7rem;
  font-weight: 500;
  letter-spacing: 0.18em;
  text-transform: uppercase;
  color: var(--text-muted);
  margin-bottom: 0.6rem;
}

.app-title {
  font-size: 1.6rem;
  font-weight: 300;
  letter-spacing: 0.08em;
  background: linear-gradient(90deg, var(--cyan), var(--violet));
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
}

.app-subtitle {
  font-size: 0.65rem;
  letter-spacing: 0.3em;
  text-transform: uppercase;
  color: var(--text-muted);
  margin: 0.25rem 0 0.75rem;
}

.status-caption {
  font-family: var(--font-mono);
  font-size: 0.7rem;
  color: var(--cyan);
  margin-bottom: 0.25rem;
}

/* === Side Rail === */
.side-rail {
  position: absolute;
  right: 2rem;
  top: 50%;
  transform: translateY(-50%);
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 2rem;
  opacity: 0.2;
  pointer-events: none;
}

.side-rail-rule {
  width: 1px;
  height: 8rem;
  background: linear-gradient(to bottom, transparent, #ffffff, transparent);
}

.side-rail-caption {
  writing-mode: vertical-lr;
  font-family: var(--font-mono);
  font-size: 8px;
  letter-spacing: 1em;
  text-transform: uppercase;
}

/* === Status === */
.ai-status {
  display: flex;
  align-items: center;
  gap: 0.6rem;
  margin-top: 0.5rem;
  font-size: 0.85rem;
  color: var(--text-secondary);
}

.status-dot {
  width: 8px;
  height: 8px;
  border-radius: 50%;
  background: var(--cyan);
  box-shadow: 0 0 8px var(--cyan-glow);
}

.status-dot.active {
  background: var(--violet);
  box-shadow: 0 0 12px var(--violet-glow);
  animation: pulse 1.2s ease-in-out infinite;
}

.status-dot.dim {
  background: var(--text-muted);
  box-shadow: none;
}

@keyframes pulse {
  0%, 100% { transform: scale(1); opacity: 1; }
  50% { transform: scale(1.6); opacity: 0.5; }
}

.config-readout {
  display: grid;
  grid-template-columns: auto auto;
  gap: 0.2rem 1rem;
  margin-top: 0.75rem;
  font-family: var(--font-mono);
  font-size: 0.72rem;
  color: var(--text-muted);
}

.swatch {
  display: inline-block;
  width: 0.7rem;
  height: 0.7rem;
  border-radius: 50%;
  margin-right: 0.3rem;
  vertical-align: middle;
}

/* === Hand Tracker === */
.hand-preview {
  position: relative;
  width: 160px;
  height: 110px;
  border-radius: 0.6rem;
  background: rgba(0, 0, 0, 0.35);
  overflow: hidden;
}

.hand-dot {
  position: absolute;
  width: 14px;
  height: 14px;
  margin: -7px 0 0 -7px;
  border-radius: 50%;
  transition: left 60ms linear, top 60ms linear;
}

.hand-readout {
  margin-top: 0.5rem;
  font-family: var(--font-mono);
  font-size: 0.72rem;
  color: var(--text-secondary);
}

.tracker-off {
  color: var(--text-muted);
  font-style: italic;
}

/* === Buttons === */
button {
  font-family: inherit;
  cursor: pointer;
  transition: all var(--transition-fast);
}

button:disabled {
  cursor: wait;
  opacity: 0.6;
}

.btn-imagine {
  padding: 0.65rem 1.4rem;
  border: none;
  border-radius: 999px;
  color: white;
  font-weight: 600;
  background: linear-gradient(135deg, var(--violet), #b400ff);
  box-shadow: 0 0 18px var(--violet-glow);
}

.btn-imagine:hover:not(:disabled) {
  transform: translateY(-1px);
  box-shadow: 0 0 28px var(--violet-glow);
}

.template-pills {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 0.5rem;
}

.btn-template {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.2rem;
  padding: 0.55rem 0.75rem;
  border: 1px solid var(--glass-border);
  border-radius: 0.7rem;
  background: transparent;
  color: var(--text-secondary);
  font-size: 0.72rem;
  letter-spacing: 0.05em;
}

.btn-template:hover {
  border-color: var(--cyan);
  color: var(--text-primary);
}

.btn-template.selected {
  border-color: var(--cyan);
  color: var(--cyan);
  background: rgba(0, 242, 255, 0.08);
  box-shadow: 0 0 14px var(--cyan-glow);
}

.template-glyph {
  font-size: 1.1rem;
}

.btn-start {
  margin-top: 1.5rem;
  padding: 0.8rem 2.4rem;
  border: 1px solid var(--cyan);
  border-radius: 999px;
  background: rgba(0, 242, 255, 0.1);
  color: var(--cyan);
  font-size: 1rem;
  letter-spacing: 0.1em;
}

.btn-start:hover {
  background: rgba(0, 242, 255, 0.2);
  box-shadow: 0 0 24px var(--cyan-glow);
}

.btn-ghost {
  margin-top: 0.6rem;
  padding: 0.3rem 0.8rem;
  border: 1px solid var(--glass-border);
  border-radius: 999px;
  background: transparent;
  color: var(--text-secondary);
  font-size: 0.72rem;
}

.icon-btn {
  border: none;
  background: transparent;
  color: var(--text-secondary);
  font-size: 1.4rem;
  line-height: 1;
}

.close-btn {
  position: absolute;
  top: 0.8rem;
  right: 1rem;
}

/* === Prompt Bar === */
.prompt-row {
  display: flex;
  gap: 0.6rem;
  align-items: center;
}

.prompt-input {
  flex: 1;
  padding: 0.7rem 1rem;
  border: 1px solid var(--glass-border);
  border-radius: 999px;
  background: rgba(0, 0, 0, 0.3);
  color: var(--cyan);
  font-size: 0.95rem;
  outline: none;
}

.prompt-input::placeholder {
  color: var(--text-muted);
  font-style: italic;
}

.prompt-input:focus {
  border-color: var(--cyan);
  box-shadow: 0 0 14px var(--cyan-glow);
}

/* === Help Overlay === */
.help-overlay {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(2, 2, 10, 0.72);
  backdrop-filter: blur(6px);
}

.help-card {
  position: relative;
  max-width: 520px;
  padding: 2.2rem 2.6rem;
  text-align: center;
  background: var(--glass-strong);
  border: 1px solid var(--glass-border);
  border-radius: 1.4rem;
}

.help-card h2 {
  font-weight: 300;
  font-size: 2rem;
  margin-bottom: 1.2rem;
}

.help-list {
  list-style: none;
  text-align: left;
  display: grid;
  gap: 0.7rem;
  color: var(--text-secondary);
}

.help-list strong {
  color: var(--cyan);
  font-weight: 500;
}
"#;
