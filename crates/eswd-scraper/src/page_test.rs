use super::*;

fn morocco() -> TargetCountry {
    TargetCountry::new("MA", "Morocco")
}

fn results_page(rows: &str) -> String {
    format!(
        "<html><body><p>number of selected reports: 2</p><table>{rows}</table></body></html>"
    )
}

const FLOOD_ROW: &str = r#"
<tr id="MA_101">
  <td><p><b> Flood </b></p><p>QC1</p></td>
  <td class="base_info">
    Morocco<br>
    01-03-2010<br>
    14:30 UTC<br>
    (31.5 N, 8.2 W)<br>
    Fès | Sefrou
  </td>
  <td class="detail_info">
    Heavy flooding in the valley.
    <br>
    Number of people dead: 2
  </td>
</tr>"#;

#[test]
fn blank_document_is_a_page_parse_error() {
    let err = locate_fragments("   \n", &morocco()).unwrap_err();
    assert!(matches!(err, ScraperError::PageParse { .. }), "got: {err:?}");
}

#[test]
fn unusable_country_code_is_a_page_parse_error() {
    let country = TargetCountry::new("M\"A", "Morocco");
    let err = locate_fragments(&results_page(FLOOD_ROW), &country).unwrap_err();
    assert!(matches!(err, ScraperError::PageParse { .. }), "got: {err:?}");
}

#[test]
fn zero_reports_marker_yields_no_reports() {
    let html = "<html><body><p>Query done, number of selected reports: 0</p></body></html>";
    assert_eq!(
        locate_fragments(html, &morocco()).unwrap(),
        PageOutcome::NoReports
    );
}

#[test]
fn page_without_rows_is_empty() {
    let html = results_page(r#"<tr id="DZ_1"><td>Algeria</td></tr>"#);
    assert_eq!(
        locate_fragments(&html, &morocco()).unwrap(),
        PageOutcome::Empty
    );
}

#[test]
fn locates_row_and_lifts_text() {
    let outcome = locate_fragments(&results_page(FLOOD_ROW), &morocco()).unwrap();
    let fragments = outcome.into_fragments();
    assert_eq!(fragments.len(), 1);

    let fragment = &fragments[0];
    assert_eq!(fragment.row_id, "MA_101");
    assert_eq!(fragment.event_label.as_deref(), Some("Flood"));
    assert_eq!(
        fragment.base_info.as_deref(),
        Some(
            &[
                "Morocco".to_owned(),
                "01-03-2010".to_owned(),
                "14:30 UTC".to_owned(),
                "(31.5 N, 8.2 W)".to_owned(),
                "Fès | Sefrou".to_owned(),
            ][..]
        )
    );
    assert_eq!(
        fragment.details.as_deref(),
        Some("Heavy flooding in the valley. Number of people dead: 2")
    );
}

#[test]
fn rows_keep_document_order_and_skip_other_countries() {
    let rows = format!(
        r#"{FLOOD_ROW}
        <tr id="DZ_7"><td><p><b>Hail</b></p></td></tr>
        <tr id="MA_102"><td><p><b>Tornado</b></p></td>
          <td class="base_info">Oujda</td><td class="detail_info">x</td></tr>"#
    );
    let fragments = locate_fragments(&results_page(&rows), &morocco())
        .unwrap()
        .into_fragments();
    let ids: Vec<&str> = fragments.iter().map(|f| f.row_id.as_str()).collect();
    assert_eq!(ids, ["MA_101", "MA_102"]);
}

#[test]
fn row_without_bold_label_has_no_event_label() {
    let rows = r#"<tr id="MA_5"><td><p>Flood</p></td>
        <td class="base_info">Oujda</td><td class="detail_info">x</td></tr>"#;
    let fragments = locate_fragments(&results_page(rows), &morocco())
        .unwrap()
        .into_fragments();
    assert_eq!(fragments[0].event_label, None);
}

#[test]
fn row_without_detail_cell_has_no_details() {
    let rows = r#"<tr id="MA_6"><td><p><b>Flood</b></p></td>
        <td class="base_info">Oujda</td></tr>"#;
    let fragments = locate_fragments(&results_page(rows), &morocco())
        .unwrap()
        .into_fragments();
    assert!(fragments[0].base_info.is_some());
    assert_eq!(fragments[0].details, None);
}

#[test]
fn located_row_extracts_end_to_end() {
    let fragments = locate_fragments(&results_page(FLOOD_ROW), &morocco())
        .unwrap()
        .into_fragments();
    let record = crate::extract(&fragments[0], &morocco()).unwrap();
    assert_eq!(record.event_type, "Flood");
    assert_eq!(record.region, "Fès");
    assert_eq!(record.location, "Sefrou");
    assert_eq!(record.latitude, "31.5");
    assert_eq!(record.longitude, "8.2");
    assert_eq!(record.date, "01-03-2010");
    assert_eq!(record.time_utc, "14:30 UTC");
    assert_eq!(record.deaths, "2");
}

#[test]
fn empty_bold_label_and_blank_details_stay_blank() {
    let rows = r#"<tr id="MA_8"><td><p><b></b></p></td>
        <td class="base_info">Morocco<br>Oujda</td><td class="detail_info"> </td></tr>"#;
    let fragments = locate_fragments(&results_page(rows), &morocco())
        .unwrap()
        .into_fragments();
    assert_eq!(fragments[0].event_label.as_deref(), Some(""));
    assert_eq!(fragments[0].details.as_deref(), Some(""));

    let record = crate::extract(&fragments[0], &morocco()).unwrap();
    assert_eq!(record.event_type, "");
    assert_eq!(record.details, "");
    assert_eq!(record.deaths, "0");
}
