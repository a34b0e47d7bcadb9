//! Global CSS styles for the portfolio.
//!
//! Per-instance animation rules (marquee keyframes) are emitted next to the
//! element that uses them and are not part of this sheet.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* TEAL (Accent) */
  --teal-50: #f0fdfa;
  --teal-100: #ccfbf1;
  --teal-400: #2dd4bf;
  --teal-500: #14b8a6;
  --teal-600: #0d9488;
  --teal-700: #0f766e;
  --teal-800: #115e59;

  /* INK (Text) */
  --ink: #0f172a;
  --ink-secondary: #475569;
  --ink-muted: #94a3b8;

  /* SURFACES */
  --white: #ffffff;
  --mist: #f8fafc;
  --border: #e2e8f0;

  /* SEMANTIC */
  --success: #10b981;
  --warning: #f59e0b;
  --danger: #ef4444;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, -apple-system, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 3rem;

  /* Radii and shadows */
  --radius: 0.75rem;
  --radius-lg: 1.25rem;
  --shadow: 0 4px 14px rgba(15, 23, 42, 0.08);
  --shadow-lg: 0 18px 40px rgba(15, 23, 42, 0.12);

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 700ms cubic-bezier(0.4, 0, 0.2, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: var(--font-sans);
  color: var(--ink);
  background: var(--white);
  line-height: 1.6;
  -webkit-font-smoothing: antialiased;
}

a {
  color: inherit;
  text-decoration: none;
}

img {
  max-width: 100%;
  display: block;
}

.container {
  width: 100%;
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 1.5rem;
}

.section {
  padding: 6rem 0;
  position: relative;
}

.section-alt {
  background: linear-gradient(180deg, var(--teal-50), var(--white));
}

.text-gradient {
  background: linear-gradient(90deg, var(--teal-600), var(--teal-400));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

/* === Section Heading === */
.section-heading {
  text-align: center;
  margin-bottom: 3.5rem;
}

.section-title {
  font-size: var(--text-2xl);
  font-weight: 800;
  letter-spacing: -0.02em;
}

.section-underline {
  width: 4rem;
  height: 4px;
  margin: 0.75rem auto 0;
  border-radius: 999px;
  background: linear-gradient(90deg, var(--teal-500), var(--teal-400));
}

.section-subtitle {
  max-width: 40rem;
  margin: 1rem auto 0;
  color: var(--ink-secondary);
}

/* === Buttons === */
.btn-primary,
.btn-outline,
.btn-ghost,
.btn-light {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 0.8rem 1.6rem;
  border-radius: 999px;
  font-weight: 600;
  font-size: var(--text-base);
  font-family: inherit;
  cursor: pointer;
  border: 2px solid transparent;
  transition: transform var(--transition-fast), box-shadow var(--transition-normal),
    background var(--transition-normal), color var(--transition-normal);
}

.btn-primary {
  background: linear-gradient(90deg, var(--teal-600), var(--teal-500));
  color: var(--white);
  box-shadow: 0 8px 20px rgba(13, 148, 136, 0.25);
}

.btn-outline {
  background: transparent;
  border-color: var(--teal-600);
  color: var(--teal-700);
}

.btn-ghost {
  background: transparent;
  color: var(--ink-secondary);
  padding: 0.5rem 0.75rem;
}

.btn-light {
  background: var(--white);
  color: var(--teal-700);
}

.btn-primary:hover:not(:disabled),
.btn-outline:hover,
.btn-light:hover {
  transform: translateY(-2px);
  box-shadow: var(--shadow-lg);
}

.btn-outline:hover {
  background: var(--teal-50);
}

.btn-ghost:hover {
  color: var(--teal-600);
}

.btn-primary:disabled {
  opacity: 0.6;
  cursor: not-allowed;
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.5rem;
  height: 2.5rem;
  border: none;
  border-radius: 999px;
  background: transparent;
  color: inherit;
  cursor: pointer;
}

.icon-btn svg {
  width: 1.4rem;
  height: 1.4rem;
}

/* === Tags === */
.tag {
  display: inline-block;
  padding: 0.2rem 0.7rem;
  border-radius: 999px;
  font-size: var(--text-xs);
  font-weight: 600;
}

.tag-accent { background: var(--teal-100); color: var(--teal-800); }
.tag-muted { background: #f1f5f9; color: var(--ink-secondary); }
.tag-success { background: #d1fae5; color: #065f46; }
.tag-warning { background: #fef3c7; color: #92400e; }

/* === Category Pills === */
.category-pills {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.75rem;
  margin-bottom: 2.5rem;
}

.pill {
  padding: 0.5rem 1.25rem;
  border-radius: 999px;
  border: 1px solid var(--border);
  background: var(--white);
  color: var(--ink-secondary);
  font-family: inherit;
  font-weight: 600;
  cursor: pointer;
  transition: all var(--transition-normal);
}

.pill:hover {
  border-color: var(--teal-400);
  color: var(--teal-700);
}

.pill.selected {
  background: linear-gradient(90deg, var(--teal-600), var(--teal-500));
  border-color: transparent;
  color: var(--white);
  box-shadow: 0 6px 16px rgba(13, 148, 136, 0.25);
}

/* === Progress === */
.progress-caption {
  display: flex;
  justify-content: space-between;
  font-size: var(--text-sm);
  margin-bottom: 0.35rem;
}

.progress-value {
  color: var(--ink-muted);
}

.progress-track {
  height: 0.5rem;
  border-radius: 999px;
  background: #e2e8f0;
  overflow: hidden;
}

.progress-compact .progress-track {
  height: 0.3rem;
}

.progress-fill {
  height: 100%;
  border-radius: inherit;
  background: linear-gradient(90deg, var(--teal-500), var(--teal-400));
  transition: width var(--transition-slow);
}

/* === Form Fields === */
.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.4rem;
}

.input-label {
  font-size: var(--text-sm);
  font-weight: 600;
  color: var(--ink-secondary);
}

.input-field {
  width: 100%;
  padding: 0.8rem 1rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  font-family: inherit;
  font-size: var(--text-base);
  background: var(--white);
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.input-field:focus {
  outline: none;
  border-color: var(--teal-500);
  box-shadow: 0 0 0 3px rgba(20, 184, 166, 0.2);
}

.input-field.textarea {
  resize: vertical;
}

/* === Reveal === */
.reveal {
  opacity: 0;
  transform: translateY(40px);
  transition: opacity var(--transition-slow), transform var(--transition-slow);
}

.reveal.visible {
  opacity: 1;
  transform: none;
}

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  padding: 1.25rem 0;
  transition: background var(--transition-normal), padding var(--transition-normal),
    box-shadow var(--transition-normal);
}

.navbar.scrolled {
  padding: 0.75rem 0;
  background: rgba(255, 255, 255, 0.92);
  backdrop-filter: blur(10px);
  box-shadow: var(--shadow);
}

.navbar-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.nav-brand {
  font-size: var(--text-xl);
  font-weight: 800;
}

.nav-brand .brand-suffix {
  color: var(--teal-500);
}

.nav-links {
  display: flex;
  gap: 0.25rem;
  list-style: none;
}

.nav-link {
  position: relative;
  display: inline-flex;
  align-items: center;
  gap: 0.3rem;
  padding: 0.5rem 0.9rem;
  border-radius: 999px;
  font-weight: 500;
  color: var(--ink-secondary);
  transition: color var(--transition-fast), background var(--transition-fast);
}

.nav-link:hover {
  color: var(--teal-600);
}

.nav-link.active {
  color: var(--teal-700);
  background: var(--teal-50);
}

.nav-link .sparkle {
  color: var(--warning);
  font-size: var(--text-xs);
}

.menu-toggle {
  display: none;
}

.mobile-menu {
  display: none;
}

@media (max-width: 768px) {
  .nav-links { display: none; }
  .menu-toggle { display: inline-flex; }
  .mobile-menu.open {
    display: flex;
    flex-direction: column;
    gap: 0.25rem;
    padding: 1rem 1.5rem;
    background: var(--white);
    box-shadow: var(--shadow);
  }
}

/* === Hero === */
.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
  overflow: hidden;
  background: radial-gradient(circle at 20% 20%, var(--teal-50), var(--white) 60%);
}

.hero-blob {
  position: absolute;
  border-radius: 50%;
  filter: blur(60px);
  opacity: 0.45;
  transition: transform 200ms ease-out;
  pointer-events: none;
}

.hero-blob.one { width: 22rem; height: 22rem; top: 10%; left: 5%; background: var(--teal-100); }
.hero-blob.two { width: 18rem; height: 18rem; bottom: 10%; right: 10%; background: #bae6fd; }
.hero-blob.three { width: 14rem; height: 14rem; top: 40%; right: 35%; background: #ddd6fe; }

.hero-content {
  position: relative;
  text-align: center;
  max-width: 52rem;
  margin: 0 auto;
}

.hero-title {
  font-size: clamp(2.5rem, 6vw, 4.5rem);
  font-weight: 800;
  line-height: 1.1;
  letter-spacing: -0.03em;
}

.typewriter {
  display: inline-flex;
  align-items: center;
  min-height: 3rem;
  margin-top: 1.5rem;
  font-size: clamp(1.4rem, 3vw, 2rem);
  font-weight: 600;
  color: var(--teal-700);
}

.cursor {
  display: inline-block;
  width: 4px;
  height: 2rem;
  margin-left: 0.25rem;
  background: var(--teal-600);
}

.cursor.hidden {
  opacity: 0;
}

.hero-lede {
  margin: 1.5rem auto 0;
  max-width: 40rem;
  font-size: var(--text-lg);
  color: var(--ink-secondary);
}

.hero-lede strong {
  color: var(--teal-700);
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1rem;
  margin-top: 2.5rem;
}

/* === About === */
.about-grid {
  display: grid;
  grid-template-columns: 1fr 1.4fr;
  gap: 4rem;
  align-items: center;
}

.avatar {
  width: 100%;
  max-width: 22rem;
  margin: 0 auto;
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-lg);
}

.about-copy h3 {
  font-size: var(--text-xl);
  margin-bottom: 1rem;
}

.about-copy p {
  color: var(--ink-secondary);
  margin-bottom: 1rem;
}

.about-copy h4 {
  margin: 1.5rem 0 0.75rem;
  font-size: var(--text-lg);
}

.badge-row {
  display: flex;
  flex-wrap: wrap;
  gap: 0.6rem;
}

.focus-badge {
  display: inline-flex;
  align-items: center;
  gap: 0.4rem;
  padding: 0.4rem 0.9rem;
  border-radius: 999px;
  border: 1px solid var(--border);
  background: var(--white);
  font-size: var(--text-sm);
  font-weight: 600;
}

.focus-dot {
  width: 0.55rem;
  height: 0.55rem;
  border-radius: 50%;
}

@media (max-width: 900px) {
  .about-grid { grid-template-columns: 1fr; }
}

/* === Projects === */
.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
  gap: 2rem;
}

.project-card {
  display: flex;
  flex-direction: column;
  overflow: hidden;
  border-radius: var(--radius-lg);
  background: var(--white);
  box-shadow: var(--shadow);
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.project-card:hover {
  transform: translateY(-6px);
  box-shadow: var(--shadow-lg);
}

.project-media {
  position: relative;
  height: 12rem;
  overflow: hidden;
}

.project-media img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.project-kind {
  position: absolute;
  top: 1rem;
  right: 1rem;
}

.project-body {
  display: flex;
  flex-direction: column;
  flex: 1;
  gap: 0.75rem;
  padding: 1.5rem;
}

.project-body p {
  color: var(--ink-secondary);
  font-size: var(--text-sm);
  flex: 1;
}

.project-links {
  display: flex;
  gap: 1rem;
  font-weight: 600;
  font-size: var(--text-sm);
}

.project-links a {
  color: var(--teal-700);
}

.projects-more {
  margin-top: 3rem;
  text-align: center;
}

/* === Skills === */
.marquee {
  position: relative;
  overflow: hidden;
  padding: 0.75rem 0;
  mask-image: linear-gradient(90deg, transparent, #000 8%, #000 92%, transparent);
}

/* Spacing trails each card so one copy's width is an exact loop period. */
.marquee-track {
  display: flex;
  width: max-content;
}

.marquee-track > * {
  flex-shrink: 0;
  margin-right: 1.25rem;
}

.marquee.static .marquee-track {
  flex-wrap: wrap;
  gap: 1.25rem;
  width: auto;
  justify-content: center;
}

.marquee.static .marquee-track > * {
  margin-right: 0;
}

.skill-card {
  width: 13rem;
  padding: 1rem 1.25rem;
  border-radius: var(--radius);
  background: var(--white);
  box-shadow: var(--shadow);
  border-top: 3px solid var(--skill-color, var(--teal-500));
}

.skill-card.compact {
  width: 10rem;
  padding: 0.75rem 1rem;
}

.skill-card-head {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 0.5rem;
  font-weight: 700;
}

.radar-card {
  margin: 3rem auto 0;
  max-width: 32rem;
  padding: 1.5rem;
  border-radius: var(--radius-lg);
  background: var(--white);
  box-shadow: var(--shadow);
}

.radar-chart {
  width: 100%;
  height: auto;
}

.radar-caption {
  font-size: 13px;
  font-weight: 600;
  fill: var(--ink-muted);
}

/* === Education === */
.education-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 3rem;
}

.subsection-title {
  font-size: var(--text-xl);
  font-weight: 700;
  margin-bottom: 1.5rem;
}

.timeline {
  position: relative;
  padding-left: 1.5rem;
  border-left: 2px solid var(--teal-100);
}

.edu-card,
.cert-card,
.course-card {
  padding: 1.25rem 1.5rem;
  margin-bottom: 1.25rem;
  border-radius: var(--radius);
  background: var(--white);
  box-shadow: var(--shadow);
}

.edu-card .years,
.cert-card .issuer,
.course-card .platform {
  font-size: var(--text-sm);
  color: var(--ink-muted);
}

.edu-card ul {
  margin: 0.5rem 0 0 1.1rem;
  color: var(--ink-secondary);
  font-size: var(--text-sm);
}

.card-row {
  display: flex;
  flex-wrap: wrap;
  gap: 0.4rem;
  margin-top: 0.6rem;
}

.course-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 1.25rem;
}

.dropdown {
  position: relative;
}

.dropdown-menu {
  position: absolute;
  right: 0;
  top: calc(100% + 0.4rem);
  z-index: 10;
  min-width: 12rem;
  padding: 0.4rem;
  list-style: none;
  border-radius: var(--radius);
  background: var(--white);
  box-shadow: var(--shadow-lg);
}

.dropdown-menu button {
  width: 100%;
  text-align: left;
  padding: 0.5rem 0.75rem;
  border: none;
  border-radius: 0.5rem;
  background: transparent;
  font-family: inherit;
  cursor: pointer;
}

.dropdown-menu button:hover,
.dropdown-menu button.selected {
  background: var(--teal-50);
  color: var(--teal-700);
}

.learning-stats {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1rem;
  margin-top: 1.5rem;
  text-align: center;
}

.stat-value {
  font-size: var(--text-xl);
  font-weight: 800;
  color: var(--teal-600);
}

.stat-label {
  font-size: var(--text-xs);
  color: var(--ink-muted);
}

@media (max-width: 900px) {
  .education-grid { grid-template-columns: 1fr; }
}

/* === Contact === */
.contact-grid {
  display: grid;
  grid-template-columns: 1fr 1.5fr;
  gap: 2.5rem;
}

.contact-info {
  padding: 2rem;
  border-radius: var(--radius-lg);
  color: var(--white);
  background: linear-gradient(135deg, var(--teal-700), var(--teal-500));
}

.contact-info h3 {
  margin-bottom: 1.5rem;
}

.info-item {
  display: flex;
  gap: 1rem;
  margin-bottom: 1.25rem;
}

.info-item svg {
  flex-shrink: 0;
  width: 1.4rem;
  height: 1.4rem;
}

.info-title {
  font-weight: 700;
}

.info-content {
  color: var(--teal-50);
}

.social-links {
  display: flex;
  gap: 0.75rem;
  margin-top: 2rem;
}

.social-links a {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.15);
  transition: background var(--transition-fast);
}

.social-links a:hover {
  background: rgba(255, 255, 255, 0.3);
}

.social-links svg {
  width: 1.2rem;
  height: 1.2rem;
  fill: currentColor;
}

.contact-form {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
  padding: 2rem;
  border-radius: var(--radius-lg);
  background: var(--white);
  box-shadow: var(--shadow);
}

.form-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1.25rem;
}

.form-status {
  padding: 0.9rem 1.1rem;
  border-radius: var(--radius);
  font-weight: 500;
}

.form-status.success {
  background: #d1fae5;
  color: #065f46;
}

.form-status.error {
  background: #fee2e2;
  color: #991b1b;
}

.spinner {
  width: 1rem;
  height: 1rem;
  border: 2px solid rgba(255, 255, 255, 0.5);
  border-top-color: var(--white);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

@media (max-width: 900px) {
  .contact-grid,
  .form-row { grid-template-columns: 1fr; }
}

/* === Footer === */
.footer {
  position: relative;
  color: var(--white);
  background: linear-gradient(135deg, var(--teal-800), var(--teal-700), var(--teal-800));
  padding: 5rem 0 2rem;
}

.footer-grid {
  display: grid;
  grid-template-columns: 2fr 1fr 1fr;
  gap: 3rem;
}

.footer h3 {
  margin-bottom: 1.25rem;
}

.footer p,
.footer-links a {
  color: var(--teal-100);
  font-size: var(--text-sm);
}

.footer-links {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.footer-links a:hover {
  color: var(--white);
}

.newsletter {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.newsletter .input-field {
  background: rgba(255, 255, 255, 0.1);
  border-color: rgba(255, 255, 255, 0.2);
  color: var(--white);
}

.footer-bottom {
  display: flex;
  justify-content: space-between;
  flex-wrap: wrap;
  gap: 1rem;
  margin-top: 3rem;
  padding-top: 1.5rem;
  border-top: 1px solid rgba(255, 255, 255, 0.15);
  font-size: var(--text-sm);
  color: var(--teal-100);
}

.back-to-top {
  position: fixed;
  right: 1.5rem;
  bottom: 1.5rem;
  z-index: 50;
  background: var(--teal-600);
  color: var(--white);
  box-shadow: var(--shadow-lg);
  opacity: 0;
  transform: translateY(2.5rem);
  pointer-events: none;
  transition: opacity var(--transition-normal), transform var(--transition-normal);
}

.back-to-top.visible {
  opacity: 1;
  transform: none;
  pointer-events: auto;
}

/* === Misc === */
.btn-block { width: 100%; justify-content: center; }

.avatar-wrap { display: flex; justify-content: center; }

.edu-institution {
  color: var(--teal-600);
  font-weight: 500;
}

.course-cert {
  display: inline-flex;
  align-items: center;
  gap: 0.35rem;
  margin-top: 0.75rem;
  font-size: 0.85rem;
  color: var(--teal-700);
}

.progress-label { color: var(--ink-secondary); }

@media (max-width: 900px) {
  .footer-grid { grid-template-columns: 1fr; }
}

/* === Reduced Motion === */
.reduced-motion *,
.reduced-motion *::before,
.reduced-motion *::after {
  animation-duration: 0.01ms !important;
  animation-iteration-count: 1 !important;
  transition-duration: 0.01ms !important;
  scroll-behavior: auto !important;
}

@media (prefers-reduced-motion: reduce) {
  html { scroll-behavior: auto; }
  .reveal { opacity: 1; transform: none; transition: none; }
}
"#;
