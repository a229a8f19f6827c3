//! Stylesheet embedded in every printable document
//!
//! Letter pages holding a 3x3 grid of poker-size (2.5in x 3.5in) cards.

/// Cards per printed sheet (3 columns x 3 rows)
pub const CARDS_PER_SHEET: usize = 9;

pub const STYLESHEET: &str = r#"
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: 'Arial', sans-serif;
    background: #f0f0f0;
    padding: 0;
    margin: 0;
}

.sheet {
    width: 8.5in;
    height: 11in;
    background: white;
    margin: 0 auto;
    page-break-after: always;
    display: grid;
    grid-template-columns: repeat(3, 2.5in);
    grid-template-rows: repeat(3, 3.5in);
    padding: 0.25in;
    gap: 0.125in;
}

.card {
    width: 2.5in;
    height: 3.5in;
    border: 2px solid #333;
    border-radius: 0.15in;
    overflow: hidden;
    background: white;
    display: flex;
    flex-direction: column;
    position: relative;
}

/* Move Cards */
.move-card .card-header {
    padding: 0.15in;
    color: white;
    text-align: center;
    min-height: 0.5in;
    display: flex;
    align-items: center;
    justify-content: center;
}

.move-card .card-name {
    font-size: 14pt;
    font-weight: bold;
    text-shadow: 1px 1px 2px rgba(0,0,0,0.3);
}

.move-card .card-body {
    flex: 1;
    display: flex;
    flex-direction: column;
    padding: 0.08in;
}

.move-card .card-image {
    flex: 1;
    display: flex;
    align-items: center;
    justify-content: center;
    margin: 0.05in 0;
}

.type-icon {
    width: 0.8in;
    height: 0.8in;
    opacity: 0.7;
}

.move-card .card-stats {
    display: flex;
    flex-direction: column;
    gap: 0.05in;
}

.stat-row {
    display: flex;
    justify-content: space-between;
    font-size: 9pt;
    padding: 0.04in 0.08in;
    border-radius: 0.05in;
    background: #f8f8f8;
}

.stat-label {
    font-weight: bold;
    color: #555;
}

.stat-value {
    color: #222;
}

.technique-row {
    background: #e8e8e8;
}

.technique-value {
    font-size: 12pt;
    font-weight: bold;
    color: #c0392b;
}

.bonus-row {
    background: #e8f5e9;
}

.bonus-value {
    font-size: 11pt;
    font-weight: bold;
    color: #27ae60;
}

.recovery-row {
    background: #e3f2fd;
    display: flex;
    align-items: center;
    gap: 0.05in;
}

.stat-label-recovery {
    flex-shrink: 0;
}

.recovery-icon {
    width: 0.25in;
    height: 0.25in;
    color: #1976d2;
}

.recovery-value {
    font-size: 8pt;
    font-weight: bold;
    color: #1565c0;
    flex: 1;
}

/* Rhythm Cards */
.rhythm-card .card-header {
    padding: 0.15in;
    background: #8E44AD;
    color: white;
    text-align: center;
}

.rhythm-card .card-name {
    font-size: 12pt;
    font-weight: bold;
}

.rhythm-card .card-body {
    flex: 1;
    padding: 0.15in;
    display: flex;
    flex-direction: column;
    gap: 0.1in;
}

.rhythm-effect {
    font-size: 14pt;
    font-weight: bold;
    color: #8E44AD;
    text-align: center;
}

.rhythm-condition {
    font-size: 9pt;
    color: #555;
    font-style: italic;
    text-align: center;
}

.rhythm-flavor {
    flex: 1;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 10pt;
    color: #666;
    font-style: italic;
    text-align: center;
    padding: 0.15in;
}

.blank-rhythm .rhythm-flavor {
    font-size: 12pt;
}

/* Judge Cards */
.judge-card {
    background: linear-gradient(to bottom, #fff 0%, #fef9f0 100%);
}

.judge-card .card-header {
    padding: 0.15in;
    background: #C0392B;
    color: white;
}

.judge-name {
    font-size: 13pt;
    font-weight: bold;
}

.judge-title {
    font-size: 9pt;
    font-style: italic;
    opacity: 0.9;
}

.judge-difficulty {
    font-size: 10pt;
    margin-top: 0.05in;
}

.judge-card .card-body {
    flex: 1;
    padding: 0.12in;
    display: flex;
    flex-direction: column;
    gap: 0.08in;
    font-size: 8pt;
}

.judge-quote {
    font-style: italic;
    color: #666;
    text-align: center;
    padding-bottom: 0.08in;
    border-bottom: 1px solid #ddd;
}

.judge-requirement {
    font-size: 8pt;
    line-height: 1.3;
}

.judge-reward {
    font-size: 9pt;
    font-weight: bold;
    color: #27ae60;
}

.judge-ongoing {
    font-size: 8pt;
    line-height: 1.3;
    flex: 1;
}

/* Stumble Cards */
.stumble-header {
    background: #5A5A5A !important;
    color: white;
}

.stumble-text {
    color: #999;
}

.stumble-bonus-row {
    background: #f0f0f0 !important;
}

.stumble-penalty-row {
    background: #FFE6E6;
    justify-content: center;
    padding: 0.06in 0.08in;
}

.stumble-penalty {
    font-size: 9pt;
    font-weight: bold;
    color: #c0392b;
    font-style: italic;
    text-align: center;
}

/* Card Backs */
.card-back {
    display: flex;
    align-items: center;
    justify-content: center;
}

.back-content {
    text-align: center;
    color: white;
}

.back-title {
    font-size: 18pt;
    font-weight: bold;
    margin-bottom: 0.2in;
}

.back-type {
    font-size: 14pt;
    text-transform: uppercase;
    letter-spacing: 0.05in;
}

/* Print Styles */
@media print {
    body {
        margin: 0;
        padding: 0;
    }

    .sheet {
        margin: 0;
        padding: 0.25in;
    }
}

@page {
    size: letter;
    margin: 0;
}
"#;
