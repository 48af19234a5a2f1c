pub const PAGE_STYLES: &str = r#"
/* Auth screen */
.auth-screen {
  min-height: 100vh;
  background-color: var(--neutral-50);
  display: flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-6);
}

.auth-column {
  width: 100%;
  max-width: 440px;
}

.auth-header {
  text-align: center;
  margin-bottom: var(--space-8);
}

.auth-header .brand {
  font-size: 1.875rem;
  margin-bottom: var(--space-2);
}

.auth-card {
  background-color: var(--surface-dark);
  backdrop-filter: blur(4px);
  border: 1px solid var(--neutral-700);
  box-shadow: var(--shadow-xl);
  color: var(--neutral-300);
}

.auth-card .card-title {
  color: white;
  font-size: 1.5rem;
  text-align: center;
}

.auth-card .card-description {
  color: var(--neutral-300);
  text-align: center;
}

.auth-card .form-label {
  color: var(--neutral-300);
}

.auth-card .form-input {
  background-color: rgba(55, 65, 81, 0.5);
  border-color: var(--neutral-600);
  color: white;
}

.auth-card .btn-outline {
  background: none;
  border-color: var(--neutral-600);
  color: var(--neutral-300);
}

.auth-card .btn-outline:hover {
  background-color: var(--neutral-700);
  color: white;
}

.divider {
  position: relative;
  text-align: center;
  margin: var(--space-6) 0;
  font-size: 0.75rem;
  text-transform: uppercase;
  color: var(--neutral-400);
}

.divider::before {
  content: "";
  position: absolute;
  left: 0;
  right: 0;
  top: 50%;
  border-top: 1px solid var(--neutral-600);
}

.divider span {
  position: relative;
  padding: 0 var(--space-2);
  background-color: #1F2937;
}

.auth-switch {
  margin-top: var(--space-6);
  text-align: center;
  font-size: 0.875rem;
  color: var(--neutral-400);
}

.auth-error {
  color: var(--error);
  font-size: 0.875rem;
}

/* Shared app chrome */
.app-page {
  min-height: 100vh;
  background: linear-gradient(135deg, #FAF5FF, #FFFFFF, #EFF6FF);
}

.app-header {
  background-color: rgba(255, 255, 255, 0.8);
  backdrop-filter: blur(4px);
  border-bottom: 1px solid var(--border);
  position: sticky;
  top: 0;
  z-index: 50;
}

.app-header .container {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding-top: var(--space-4);
  padding-bottom: var(--space-4);
}

.app-header .group {
  display: flex;
  align-items: center;
  gap: var(--space-4);
}

.app-title {
  font-size: 1.5rem;
  font-weight: 700;
}

.page-body {
  padding-top: var(--space-8);
  padding-bottom: var(--space-8);
}

/* Dashboard */
.welcome h1 {
  font-size: 1.875rem;
  font-weight: 700;
  margin-bottom: var(--space-2);
}

.welcome {
  margin-bottom: var(--space-8);
}

.search-input {
  padding: var(--space-2) var(--space-4);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  background-color: var(--surface-glass);
}

.avatar {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 32px;
  height: 32px;
  border-radius: var(--radius-full);
  background: var(--brand-gradient);
  color: white;
  font-weight: 600;
}

.avatar.large {
  width: 64px;
  height: 64px;
  font-size: 1.5rem;
}

.overview-grid {
  display: grid;
  gap: var(--space-8);
  grid-template-columns: 1fr;
  margin-top: var(--space-8);
}

@media (min-width: 1024px) {
  .overview-grid { grid-template-columns: 2fr 1fr; }
  .builder-grid { grid-template-columns: 2fr 1fr; }
}

.stat-head {
  display: flex;
  align-items: center;
  justify-content: space-between;
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.stat-glyph {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 32px;
  height: 32px;
  border-radius: var(--radius-lg);
  color: white;
}

.stat-value {
  font-size: 1.5rem;
  font-weight: 700;
  margin-top: var(--space-2);
}

.stat-change {
  font-size: 0.75rem;
  color: var(--success);
  margin-top: var(--space-1);
}

.activity {
  display: flex;
  align-items: flex-start;
  gap: var(--space-4);
  padding: var(--space-4);
  border-radius: var(--radius-lg);
  background-color: var(--surface-glass);
  transition: background-color var(--transition-fast) var(--easing-standard);
}

.activity:hover {
  background-color: rgba(255, 255, 255, 0.8);
}

.activity-body {
  flex: 1;
  min-width: 0;
}

.activity-title {
  font-size: 0.875rem;
  font-weight: 500;
}

.muted {
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.faint {
  font-size: 0.75rem;
  color: var(--text-tertiary);
}

.kit-thumbnail {
  height: 128px;
  border-radius: var(--radius-lg);
  margin-bottom: var(--space-4);
  display: flex;
  align-items: center;
  justify-content: center;
  color: white;
  font-size: 1.125rem;
  font-weight: 600;
}

.kit-actions {
  display: flex;
  gap: var(--space-2);
}

.kit-actions .grow {
  flex: 1;
}

.big-number {
  font-size: 1.875rem;
  font-weight: 700;
}

/* Builder */
.builder-grid {
  display: grid;
  gap: var(--space-8);
  grid-template-columns: 1fr;
}

.section-heading {
  font-size: 1.25rem;
  font-weight: 600;
}

.platform-card {
  padding: var(--space-4);
}

.platform-card.instagram { background: linear-gradient(90deg, #FDF2F8, #FAF5FF); }
.platform-card.youtube { background: linear-gradient(90deg, #FEF2F2, #FDF2F8); }

.tips {
  background: var(--brand-gradient);
  color: white;
  border: none;
}

.tips ul {
  list-style: none;
  font-size: 0.875rem;
  opacity: 0.9;
}

.template-card {
  cursor: pointer;
  padding: var(--space-4);
  transition: box-shadow var(--transition-normal) var(--easing-standard);
}

.template-card:hover {
  box-shadow: var(--shadow-lg);
}

.template-card.selected {
  box-shadow: 0 0 0 2px #A855F7, var(--shadow-lg);
}

.template-thumb {
  position: relative;
  height: 128px;
  border-radius: var(--radius-lg);
  overflow: hidden;
  margin-bottom: var(--space-4);
}

.template-thumb .overlay {
  position: absolute;
  inset: 0;
  opacity: 0.2;
}

.template-thumb .check {
  position: absolute;
  top: var(--space-2);
  right: var(--space-2);
  width: 24px;
  height: 24px;
  border-radius: var(--radius-full);
  background-color: #A855F7;
  color: white;
  display: flex;
  align-items: center;
  justify-content: center;
}

.template-lines {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
}

.template-lines div {
  height: 8px;
  border-radius: 4px;
  background-color: rgba(255, 255, 255, 0.5);
}

/* Preview */
.preview-body {
  max-width: 896px;
  padding-top: var(--space-12);
  padding-bottom: var(--space-12);
}

.preview-hero {
  text-align: center;
  margin-bottom: var(--space-12);
}

.preview-avatar {
  width: 128px;
  height: 128px;
  border-radius: var(--radius-full);
  background: linear-gradient(135deg, #D1D5DB, #9CA3AF);
  margin: 0 auto var(--space-6) auto;
  display: flex;
  align-items: center;
  justify-content: center;
  color: white;
  font-size: 2.25rem;
  font-weight: 700;
}

.preview-name {
  font-size: 2.25rem;
  font-weight: 700;
  margin-bottom: var(--space-2);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.preview-title {
  font-size: 1.25rem;
  color: var(--text-secondary);
  margin-bottom: var(--space-4);
}

.preview-section {
  margin-bottom: var(--space-12);
}

.preview-section > h2 {
  font-size: 1.5rem;
  font-weight: 700;
  margin-bottom: var(--space-6);
  text-align: center;
}

.preview-card {
  border: none;
  box-shadow: var(--shadow-lg);
  backdrop-filter: blur(4px);
}

.platform-head {
  display: flex;
  align-items: center;
  gap: var(--space-3);
  margin-bottom: var(--space-4);
}

.platform-icon {
  padding: var(--space-2);
  border-radius: var(--radius-lg);
  color: white;
}

.platform-icon.instagram { background: linear-gradient(90deg, #EC4899, #9333EA); }
.platform-icon.youtube { background: linear-gradient(90deg, #EF4444, #DC2626); }

.platform-stat {
  text-align: center;
}

.platform-stat .value {
  font-size: 1.5rem;
  font-weight: 700;
}

.platform-stat .value.instagram { color: #9333EA; }
.platform-stat .value.youtube { color: #DC2626; }

.rate {
  text-align: center;
}

.rate .price {
  font-size: 1.875rem;
  font-weight: 700;
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.preview-cta {
  text-align: center;
  color: white;
  border: none;
  box-shadow: var(--shadow-xl);
}

.preview-cta h2 {
  font-size: 1.875rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
}

.preview-cta p {
  font-size: 1.25rem;
  margin-bottom: var(--space-6);
  opacity: 0.9;
}
"#;
