pub const PREDICTION_STYLES: &str = r#"
.prediction-layout {
    display: grid;
    grid-template-columns: 1.2fr 1fr;
    gap: 1.5rem;
    align-items: start;
}

@media (max-width: 960px) {
    .prediction-layout {
        grid-template-columns: 1fr;
    }
}

.form-section .card h2,
.result-card h2 {
    margin-bottom: 1rem;
}

/* Image upload */
.image-upload-section {
    margin-bottom: 1.25rem;
}

.image-upload-label {
    display: block;
    font-weight: 600;
    margin-bottom: 0.5rem;
}

.image-upload-area {
    border: 2px dashed var(--border-color);
    border-radius: 10px;
    min-height: 150px;
    display: flex;
    align-items: center;
    justify-content: center;
}

.upload-placeholder {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 0.25rem;
    padding: 1.5rem;
    cursor: pointer;
    color: var(--text-secondary);
    text-align: center;
}

.upload-icon {
    font-size: 2rem;
}

.upload-hint {
    font-size: 0.8rem;
}

.image-preview {
    position: relative;
    padding: 0.75rem;
}

.image-preview img {
    max-width: 100%;
    max-height: 220px;
    border-radius: 8px;
}

.remove-image {
    position: absolute;
    top: 0.25rem;
    right: 0.25rem;
    width: 1.75rem;
    height: 1.75rem;
    border: none;
    border-radius: 50%;
    background: var(--error-text);
    color: white;
    font-size: 1rem;
    cursor: pointer;
}

/* Measurement grid */
.form-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1rem;
    margin-bottom: 1.25rem;
}

.form-group label {
    display: block;
    font-weight: 600;
    margin-bottom: 0.35rem;
}

.form-group .required {
    color: var(--error-text);
}

.form-group input {
    width: 100%;
    padding: 0.55rem 0.7rem;
    border: 1px solid var(--border-color);
    border-radius: 8px;
    font-size: 0.95rem;
}

.form-group input:focus {
    outline: none;
    border-color: var(--accent);
}

/* Error banner */
.error-message {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    margin-bottom: 1rem;
    padding: 0.7rem 0.9rem;
    background: var(--error-bg);
    border: 1px solid var(--error-border);
    border-radius: 8px;
    color: var(--error-text);
}

/* Buttons */
.button-group {
    display: flex;
    gap: 0.75rem;
}

.btn {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.6rem 1.25rem;
    border: none;
    border-radius: 8px;
    font-size: 0.95rem;
    font-weight: 600;
    cursor: pointer;
}

.btn:disabled {
    opacity: 0.7;
    cursor: not-allowed;
}

.btn-primary {
    background: linear-gradient(90deg, var(--accent), var(--accent-dark));
    color: white;
}

.btn-secondary {
    background: var(--page-bg);
    border: 1px solid var(--border-color);
    color: var(--text-primary);
}

.spinner {
    width: 0.9rem;
    height: 0.9rem;
    border: 2px solid rgba(255, 255, 255, 0.4);
    border-top-color: white;
    border-radius: 50%;
    animation: spin 0.7s linear infinite;
}

@keyframes spin {
    to { transform: rotate(360deg); }
}

/* Result panel */
.prediction-badge {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    padding: 1rem 1.25rem;
    border-radius: 10px;
    color: white;
    margin-bottom: 1.25rem;
}

.species-icon {
    font-size: 1.75rem;
}

.species-name {
    font-size: 1.25rem;
    font-weight: 700;
}

.confidence-section h3,
.probabilities-section h3 {
    margin-bottom: 0.5rem;
}

.confidence-bar-container,
.probability-bar-container {
    height: 0.6rem;
    background: var(--page-bg);
    border-radius: 999px;
    overflow: hidden;
}

.confidence-bar,
.probability-bar {
    height: 100%;
    border-radius: 999px;
}

.confidence-value {
    margin-top: 0.35rem;
    font-weight: 700;
    margin-bottom: 1.25rem;
}

.probability-list {
    display: flex;
    flex-direction: column;
    gap: 0.6rem;
}

.probability-item {
    display: grid;
    grid-template-columns: 7rem 1fr 3.5rem;
    align-items: center;
    gap: 0.6rem;
}

.probability-label {
    display: flex;
    align-items: center;
    gap: 0.4rem;
    font-size: 0.9rem;
}

.species-dot {
    width: 0.6rem;
    height: 0.6rem;
    border-radius: 50%;
}

.probability-value {
    text-align: right;
    font-size: 0.9rem;
    font-weight: 600;
}

/* Placeholder before first success */
.placeholder-card {
    text-align: center;
}

.placeholder-content {
    padding: 2rem 1rem;
    color: var(--text-secondary);
}

.placeholder-icon {
    font-size: 2rem;
    margin-bottom: 0.5rem;
}
"#;
