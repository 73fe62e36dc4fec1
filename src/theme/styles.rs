//! Global CSS styles for the delegation dashboard.
//!
//! Dark surface, one accent per stat card.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --bg: #0d0f14;
  --surface: #161a22;
  --border: #262c38;

  --text-primary: #f2f4f8;
  --text-secondary: rgba(242, 244, 248, 0.7);
  --text-muted: rgba(242, 244, 248, 0.45);

  /* Card accents */
  --orange: #f5a524;
  --purple: #9b7bff;
  --red: #ff5c7a;
  --green: #3ccf91;

  --accent: #1b46c2;
  --danger: #ff5c7a;

  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --radius: 10px;
  --space-sm: 0.5rem;
  --space-md: 1rem;
  --space-lg: 1.5rem;
}

/* === Base === */
* { box-sizing: border-box; }

html, body {
  margin: 0;
  background: var(--bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: 15px;
}

code { font-family: var(--font-mono); }

/* === Layout === */
.page { min-height: 100vh; display: flex; flex-direction: column; }
.page__content { padding: var(--space-lg); flex: 1; }
.page__notice { color: var(--text-secondary); margin: 0 0 var(--space-md); }

/* === Nav Header === */
.nav-header {
  display: flex;
  align-items: center;
  gap: var(--space-lg);
  padding: var(--space-md) var(--space-lg);
  border-bottom: 1px solid var(--border);
  background: var(--surface);
}

.nav-header__brand { display: flex; align-items: baseline; gap: var(--space-sm); }
.nav-header__title { font-size: 1.15rem; margin: 0; }
.nav-header__network { color: var(--text-muted); font-size: 0.85rem; }
.nav-header__links { display: flex; gap: var(--space-md); }
.nav-header__contract {
  margin-left: auto;
  color: var(--text-muted);
  font-size: 0.75rem;
  overflow: hidden;
  text-overflow: ellipsis;
  white-space: nowrap;
  max-width: 40%;
}

.nav-link {
  color: var(--text-secondary);
  text-decoration: none;
  padding: 0.25rem 0.5rem;
  border-radius: 6px;
}
.nav-link:hover { color: var(--text-primary); }
.nav-link.active { color: var(--text-primary); background: var(--border); }

/* === Overview === */
.overview__toolbar { display: flex; justify-content: flex-end; margin-bottom: var(--space-md); }

.stat-cards {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
  gap: var(--space-md);
}

/* === Stat Card === */
.stat-card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-top: 3px solid var(--card-accent);
  border-radius: var(--radius);
  padding: var(--space-md);
  display: flex;
  flex-direction: column;
  gap: var(--space-sm);
}

.stat-card--orange { --card-accent: var(--orange); }
.stat-card--purple { --card-accent: var(--purple); }
.stat-card--red { --card-accent: var(--red); }
.stat-card--green { --card-accent: var(--green); }

.stat-card__header { display: flex; align-items: center; gap: var(--space-sm); }
.stat-card__icon { width: 28px; height: 28px; color: var(--card-accent); }
.stat-card__icon svg { width: 100%; height: 100%; }
.stat-card__title { color: var(--text-secondary); font-size: 0.85rem; }
.stat-card__value { font-size: 1.5rem; font-weight: 600; }
.stat-card__unit { font-size: 0.9rem; color: var(--text-secondary); font-weight: 400; }
.stat-card__percentage { color: var(--text-muted); font-size: 0.8rem; }
.stat-card__actions:empty { display: none; }

/* === Buttons === */
.btn {
  font: inherit;
  border-radius: 6px;
  padding: 0.4rem 0.9rem;
  cursor: pointer;
  border: 1px solid transparent;
  text-decoration: none;
  display: inline-block;
}
.btn:disabled { opacity: 0.5; cursor: not-allowed; }
.btn-primary { background: var(--accent); color: #fff; }
.btn-outline { background: transparent; border-color: var(--border); color: var(--text-primary); }
.btn-link { background: none; color: var(--card-accent, var(--accent)); padding: 0; }

/* === Forms === */
.action-form { display: flex; flex-direction: column; gap: var(--space-sm); }
.action-form__buttons { display: flex; gap: var(--space-md); align-items: center; }
.form-field { display: flex; flex-direction: column; gap: 0.25rem; }
.input-label { font-size: 0.8rem; color: var(--text-secondary); }
.input-group { display: flex; align-items: center; gap: var(--space-sm); }
.input-field {
  flex: 1;
  background: var(--bg);
  color: var(--text-primary);
  border: 1px solid var(--border);
  border-radius: 6px;
  padding: 0.4rem 0.6rem;
  font: inherit;
}
.input-field.invalid { border-color: var(--danger); }
.input-suffix { color: var(--text-muted); font-size: 0.85rem; }
.input-error { color: var(--danger); font-size: 0.8rem; margin: 0; }

/* === Sign Transaction === */
.sign-tx { display: flex; flex-direction: column; gap: var(--space-sm); }
.sign-tx__data { font-size: 0.75rem; word-break: break-all; color: var(--text-secondary); }
.sign-tx__meta { margin: 0; font-size: 0.75rem; color: var(--text-muted); }
.sign-tx__buttons { display: flex; gap: var(--space-md); align-items: center; }

/* === Contract Details === */
.contract-details {
  margin-top: var(--space-lg);
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: var(--space-md) var(--space-lg);
}
.contract-details__title { font-size: 1rem; margin: 0 0 var(--space-md); }
.contract-details__list { margin: 0; display: grid; gap: var(--space-sm); }
.contract-details__row { display: flex; justify-content: space-between; gap: var(--space-md); }
.contract-details__row dt { color: var(--text-secondary); }
.contract-details__row dd { margin: 0; font-family: var(--font-mono); word-break: break-all; }
"#;
