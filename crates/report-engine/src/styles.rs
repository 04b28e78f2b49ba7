//! Embedded report stylesheet.
//!
//! The print rules are part of the output contract: the downstream
//! headless-browser renderer relies on `.page-break` and the
//! `page-break-inside: avoid` wrappers to paginate correctly.

pub const REPORT_STYLESHEET: &str = r#"
  * { box-sizing: border-box; }
  body {
    font-family: Helvetica, Arial, sans-serif;
    color: #1f2430;
    margin: 0;
    padding: 24px 32px;
    font-size: 13px;
    line-height: 1.5;
  }
  h1 { font-size: 26px; margin: 0 0 4px 0; }
  h2 { font-size: 18px; margin: 24px 0 8px 0; border-bottom: 2px solid #1f2430; padding-bottom: 4px; }
  h3 { font-size: 15px; margin: 16px 0 6px 0; }
  p { margin: 6px 0; }

  .report-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px; }
  .report-header .contact { text-align: right; font-size: 12px; }
  .report-header img.logo { max-height: 72px; }
  .hero-image { width: 100%; max-height: 320px; object-fit: cover; margin: 12px 0; }
  .header-text { font-size: 13px; margin-bottom: 12px; }

  .legal-section { page-break-inside: avoid; margin-bottom: 16px; }
  .legal-section p { text-align: justify; }

  table { width: 100%; border-collapse: collapse; margin: 12px 0; page-break-inside: avoid; }
  th, td { border: 1px solid #c6ccd6; padding: 6px 8px; text-align: left; vertical-align: top; }
  th { background: #eef1f5; font-weight: bold; }
  td.amount, th.amount { text-align: right; white-space: nowrap; }
  tr.grand-total td { font-weight: bold; background: #eef1f5; }

  .defect-block { page-break-inside: avoid; margin-bottom: 20px; }
  .defect-heading { color: #ffffff; padding: 6px 10px; border-radius: 3px; display: flex; justify-content: space-between; }
  .severity-badge { font-size: 11px; text-transform: uppercase; letter-spacing: 0.05em; }
  .defect-columns { display: flex; gap: 16px; margin-top: 8px; }
  .defect-media { flex: 0 0 40%; }
  .defect-media img { width: 100%; border: 1px solid #c6ccd6; }
  .defect-location { font-size: 12px; color: #4b5565; margin-top: 4px; }
  .defect-detail { flex: 1; }
  .cost-line { display: flex; justify-content: space-between; font-size: 12px; }
  .cost-total { border-top: 1px solid #c6ccd6; margin-top: 4px; padding-top: 4px; font-weight: bold; }

  .info-block { page-break-inside: avoid; background: #f7f8fa; border: 1px solid #dde1e8; padding: 10px 12px; margin: 10px 0; }
  .info-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 6px 18px; }
  .info-item .item-comment { margin-left: 14px; color: #4b5565; }
  .info-images { display: flex; flex-wrap: wrap; gap: 8px; margin-top: 6px; }
  .info-images figure { margin: 0; width: 160px; }
  .info-images img { width: 100%; border: 1px solid #c6ccd6; }
  .info-images figcaption { font-size: 11px; color: #4b5565; }

  .report-footer { margin-top: 28px; font-size: 11px; color: #4b5565; text-align: center; }

  .page-break { page-break-after: always; height: 0; }

  @media print {
    body { padding: 0; }
    .page-break { page-break-after: always; }
    .defect-block, .legal-section, table, .info-block { page-break-inside: avoid; }
  }
"#;
