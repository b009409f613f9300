//! Global stylesheet: palette variables, resets and the handful of classes
//! shared across sections. Component-specific rules and keyframes live in
//! `<style>` blocks next to the markup that uses them.

pub const GLOBAL_CSS: &str = r#"
:root[data-theme="dark"] {
    --bg-primary: #0b0b12;
    --bg-secondary: #14141f;
    --bg-elevated: #1c1c2b;
    --text-primary: #f2f2f7;
    --text-secondary: #9a9ab0;
    --accent: #7c5cff;
    --accent-soft: rgba(124, 92, 255, 0.25);
    --gradient-primary: linear-gradient(135deg, #7c5cff 0%, #3ec6e0 100%);
    --shadow-medium: rgba(0, 0, 0, 0.45);
    --border-subtle: rgba(124, 92, 255, 0.15);
}

* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    background: var(--bg-primary);
    color: var(--text-primary);
    font-family: 'Segoe UI', 'Helvetica Neue', Arial, sans-serif;
    min-height: 100vh;
    overflow-x: hidden;
}

.hidden {
    display: none !important;
}

button {
    font: inherit;
    border: none;
    cursor: pointer;
    color: inherit;
    background: none;
}

.primary-btn {
    background: var(--gradient-primary);
    color: #fff;
    font-weight: 600;
    padding: 0.9rem 2.2rem;
    border-radius: 30px;
    box-shadow: 0 8px 24px var(--shadow-medium);
    transition: transform 0.2s ease, box-shadow 0.2s ease;
}

.primary-btn:hover {
    transform: translateY(-2px);
    box-shadow: 0 12px 32px var(--shadow-medium);
}

.ghost-btn {
    color: var(--text-secondary);
    border: 1px solid var(--border-subtle);
    padding: 0.6rem 1.4rem;
    border-radius: 24px;
    transition: color 0.2s ease, border-color 0.2s ease;
}

.ghost-btn:hover {
    color: var(--text-primary);
    border-color: var(--accent);
}

section.landing-page,
section.gallery-section {
    min-height: 100vh;
    padding: 4rem 1.5rem 3rem;
    display: flex;
    flex-direction: column;
    align-items: center;
}

section.landing-page {
    justify-content: center;
}

@media (max-width: 640px) {
    section.landing-page,
    section.gallery-section {
        padding: 2.5rem 1rem 2rem;
    }
}
"#;
