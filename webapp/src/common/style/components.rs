pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  font-weight: 500;
  font-size: 0.875rem;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard),
              box-shadow var(--transition-fast) var(--easing-standard);
  border: 1px solid transparent;
  outline: none;
  background: none;
}

.btn:focus {
  box-shadow: 0 0 0 3px rgba(147, 51, 234, 0.3);
}

.btn:active {
  transform: translateY(1px);
}

.btn:disabled {
  opacity: 0.6;
  cursor: wait;
}

.btn-primary {
  background-color: var(--primary);
  color: white;
}

.btn-primary:hover {
  background-color: var(--primary-dark);
}

.btn-gradient {
  background: var(--brand-gradient);
  color: white;
}

.btn-gradient:hover {
  filter: brightness(0.92);
}

.btn-outline {
  border-color: var(--border);
  background-color: var(--surface);
  color: var(--text-primary);
}

.btn-outline:hover {
  background-color: var(--neutral-100);
}

.btn-ghost {
  color: var(--text-secondary);
}

.btn-ghost:hover {
  color: var(--text-primary);
  background-color: var(--neutral-100);
}

.btn-link {
  color: var(--primary-light);
  font-weight: 600;
  padding: var(--space-1);
}

.btn-link:hover {
  text-decoration: underline;
}

.btn-white {
  background-color: white;
  color: var(--primary);
}

.btn-white:hover {
  background-color: var(--neutral-100);
}

.btn-sm {
  padding: var(--space-1) var(--space-3);
  font-size: 0.8rem;
}

.btn-lg {
  padding: var(--space-4) var(--space-8);
  font-size: 1.125rem;
}

.btn-block {
  width: 100%;
}

/* Cards */
.card {
  background-color: var(--surface);
  border-radius: var(--radius-xl);
  border: 1px solid var(--border);
  box-shadow: var(--shadow-sm);
  padding: var(--space-6);
}

.card-glass {
  background-color: var(--surface-glass);
  backdrop-filter: blur(4px);
  border: none;
  box-shadow: var(--shadow-lg);
}

.card-lift {
  transition: transform var(--transition-normal) var(--easing-standard),
              box-shadow var(--transition-normal) var(--easing-standard);
}

.card-lift:hover {
  transform: translateY(-4px);
  box-shadow: var(--shadow-xl);
}

.card-title {
  font-size: 1.125rem;
  font-weight: 600;
  color: var(--text-primary);
}

.card-description {
  font-size: 0.875rem;
  color: var(--text-secondary);
  margin-bottom: var(--space-4);
}

/* Badges */
.badge {
  display: inline-flex;
  align-items: center;
  padding: 2px var(--space-3);
  border-radius: var(--radius-full);
  font-size: 0.75rem;
  font-weight: 600;
  background-color: var(--primary);
  color: white;
}

.badge-secondary { background-color: var(--neutral-100); color: var(--neutral-700); }
.badge-purple { background-color: #F3E8FF; color: #7E22CE; }
.badge-blue { background-color: #DBEAFE; color: #1D4ED8; }
.badge-green { background-color: #DCFCE7; color: #15803D; }
.badge-pink { background-color: #FCE7F3; color: #BE185D; }
.badge-orange { background-color: #FFEDD5; color: #C2410C; }

/* Form Elements */
.form-group {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
}

.form-label {
  display: block;
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-primary);
}

.form-input,
.form-textarea {
  width: 100%;
  padding: var(--space-2) var(--space-3);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  background-color: var(--surface);
  color: var(--text-primary);
  font-size: 0.875rem;
  transition: border-color var(--transition-fast) var(--easing-standard),
              box-shadow var(--transition-fast) var(--easing-standard);
}

.form-input:focus,
.form-textarea:focus {
  border-color: var(--border-focus);
  box-shadow: 0 0 0 3px rgba(147, 51, 234, 0.2);
  outline: none;
}

.form-textarea {
  min-height: 120px;
  resize: vertical;
}

.password-wrapper {
  position: relative;
}

.password-wrapper .form-input {
  padding-right: var(--space-10);
}

.password-toggle {
  position: absolute;
  right: 0;
  top: 0;
  height: 100%;
  padding: 0 var(--space-3);
  color: var(--neutral-400);
  background: none;
  border: none;
  cursor: pointer;
}

.password-toggle:hover {
  color: var(--text-primary);
}

/* Tabs */
.tab-bar {
  display: grid;
  grid-auto-flow: column;
  grid-auto-columns: 1fr;
  gap: var(--space-1);
  padding: var(--space-1);
  background-color: var(--neutral-100);
  border-radius: var(--radius-lg);
  margin-bottom: var(--space-6);
}

.tab-bar.inline {
  display: inline-flex;
  background-color: var(--surface-glass);
}

.tab {
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-secondary);
  background: none;
  border: none;
  cursor: pointer;
}

.tab.active {
  background-color: var(--surface);
  color: var(--text-primary);
  box-shadow: var(--shadow-sm);
}

.tab-bar.inline .tab.active {
  background: var(--brand-gradient);
  color: white;
}

/* Layout utilities */
.container {
  width: 100%;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-6);
}

.grid-2,
.grid-3 {
  display: grid;
  gap: var(--space-6);
  grid-template-columns: 1fr;
}

@media (min-width: 768px) {
  .grid-2 { grid-template-columns: repeat(2, 1fr); }
  .grid-3 { grid-template-columns: repeat(3, 1fr); }
}

.stack {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
}

.row {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: var(--space-4);
}

.gradient-text {
  background: var(--brand-gradient);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

/* Entry animation */
.fade-in {
  animation: fade-in-up 0.4s var(--easing-standard) both;
}

@keyframes fade-in-up {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}
"#;
