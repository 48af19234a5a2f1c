pub const LANDING_STYLES: &str = r#"
/* Landing Page Styles */

.landing {
  min-height: 100vh;
  background-color: var(--background);
}

.landing-nav {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: var(--space-6);
  border-bottom: 1px solid var(--border);
}

.brand {
  font-weight: 700;
  font-size: 1.5rem;
  color: var(--primary);
}

.landing-nav .actions {
  display: flex;
  gap: var(--space-4);
}

/* Hero Section */
.hero {
  padding: var(--space-20) 0;
  text-align: center;
}

.hero .badge {
  margin-bottom: var(--space-6);
  background-color: #F3E8FF;
  color: var(--primary);
}

.hero-title {
  font-size: 3.5rem;
  font-weight: 700;
  line-height: 1.1;
  margin-bottom: var(--space-6);
  color: var(--text-primary);
}

.hero-title span {
  color: var(--primary);
}

.hero-subtitle {
  font-size: 1.25rem;
  color: var(--text-secondary);
  max-width: 640px;
  margin: 0 auto var(--space-8) auto;
}

.hero-actions {
  display: flex;
  gap: var(--space-4);
  justify-content: center;
}

/* Stats */
.landing-stats {
  margin: var(--space-20) auto 0 auto;
  max-width: 900px;
}

.landing-stat {
  text-align: center;
}

.icon-bubble {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 48px;
  height: 48px;
  border-radius: var(--radius-full);
  background-color: #F3E8FF;
  color: var(--primary);
  font-size: 1.25rem;
  margin: 0 auto var(--space-4) auto;
}

.icon-bubble.square {
  border-radius: var(--radius-lg);
  margin: 0 0 var(--space-4) 0;
}

.landing-stat h3 {
  font-size: 1.875rem;
  font-weight: 700;
  margin-bottom: var(--space-2);
}

.landing-stat p,
.feature-card p {
  color: var(--text-secondary);
}

/* Features */
.features {
  padding: var(--space-20) 0;
  background-color: var(--neutral-50);
}

.features-header {
  text-align: center;
  margin-bottom: var(--space-16);
}

.features-header h2,
.cta h2 {
  font-size: 2.5rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
}

.features-header p {
  font-size: 1.25rem;
  color: var(--text-secondary);
}

.feature-card h3 {
  font-size: 1.25rem;
  font-weight: 600;
  margin-bottom: var(--space-2);
}

/* Call to action */
.cta-section {
  padding: var(--space-20) 0;
}

.cta {
  background-color: var(--primary);
  border-radius: var(--radius-3xl);
  padding: var(--space-12);
  text-align: center;
  color: white;
}

.cta p {
  font-size: 1.25rem;
  margin-bottom: var(--space-8);
  opacity: 0.9;
}

/* Footer */
.landing-footer {
  border-top: 1px solid var(--border);
  background-color: var(--neutral-50);
  padding: var(--space-12) 0;
}

.footer-grid {
  display: grid;
  gap: var(--space-8);
  grid-template-columns: 1fr;
}

@media (min-width: 768px) {
  .footer-grid { grid-template-columns: repeat(4, 1fr); }
}

.footer-grid h4 {
  font-weight: 600;
  margin-bottom: var(--space-4);
}

.footer-link {
  color: var(--text-secondary);
  cursor: pointer;
  margin-bottom: var(--space-2);
}

.footer-link:hover {
  color: var(--text-primary);
}

.footer-bottom {
  border-top: 1px solid var(--border);
  margin-top: var(--space-12);
  padding-top: var(--space-8);
  text-align: center;
  color: var(--text-secondary);
}
"#;
