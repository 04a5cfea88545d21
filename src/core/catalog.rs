use crate::core::date_format::format_report_date;
use crate::domain::model::{DocumentLocation, Farm, InspectionReport, MapView, ReportRecord};

pub const DEFAULT_REPORT_IMAGES: [&str; 2] = ["/agalla-aguacate.jpeg", "/plaga-aguacate.jpg"];

pub const GENERAL_POLICY_DOCUMENT_URL: &str =
    "https://docs.google.com/document/d/1Wf_lZjPJNcrCGtLND43f4lXEwG2hoMT6/edit";

// Sheet farms are laid out diagonally from this anchor, one step per record.
const SHEET_FARM_LATITUDE: f64 = 5.7920;
const SHEET_FARM_LONGITUDE: f64 = -75.7780;
const SHEET_FARM_STEP: f64 = 0.001;

const MAP_ZOOM: f64 = 12.0;

impl InspectionReport {
    pub fn new(id: &str, date: &str, description: &str, images: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            date: date.to_string(),
            date_label: format_report_date(date),
            description: description.to_string(),
            images: images.iter().map(|s| s.to_string()).collect(),
        }
    }
}

pub fn farms_map_view(style_url: &str) -> MapView {
    MapView {
        style_url: style_url.to_string(),
        longitude: -75.78,
        latitude: 5.79,
        zoom: MAP_ZOOM,
    }
}

pub fn policy_map_view(style_url: &str) -> MapView {
    MapView {
        style_url: style_url.to_string(),
        longitude: -75.3736,
        latitude: 6.1549,
        zoom: MAP_ZOOM,
    }
}

/// Monitored farms with their recorded inspection history.
pub fn fixture_farms() -> Vec<Farm> {
    let agalla_first = ["/agalla-aguacate.jpeg", "/plaga-aguacate.jpg"];
    let plaga_first = ["/plaga-aguacate.jpg", "/agalla-aguacate.jpeg"];

    vec![
        Farm {
            id: "finca-esperanza".to_string(),
            name: "Finca La Esperanza".to_string(),
            description: "Cultivo de aguacate y café orgánico en las montañas de Jericó"
                .to_string(),
            latitude: 5.7964,
            longitude: -75.7821,
            reports: vec![
                InspectionReport::new(
                    "rep-1",
                    "2025-03-15",
                    "Detección de agallas en hojas de aguacate. Se observa deformación significativa en el follaje joven.",
                    &agalla_first,
                ),
                InspectionReport::new(
                    "rep-2",
                    "2025-06-22",
                    "Monitoreo de seguimiento. Las agallas se han extendido a más árboles del cultivo.",
                    &agalla_first,
                ),
                InspectionReport::new(
                    "rep-3",
                    "2025-09-08",
                    "Aplicación de tratamiento biológico. Se observa reducción en la formación de nuevas agallas.",
                    &agalla_first,
                ),
            ],
        },
        Farm {
            id: "finca-mirador".to_string(),
            name: "Finca El Mirador".to_string(),
            description: "Producción de aguacate Hass con vista panorámica del valle".to_string(),
            latitude: 5.7887,
            longitude: -75.7693,
            reports: vec![
                InspectionReport::new(
                    "rep-4",
                    "2025-04-12",
                    "Primera aparición de plagas en cultivo de aguacate. Daño inicial en hojas superiores.",
                    &plaga_first,
                ),
                InspectionReport::new(
                    "rep-5",
                    "2025-07-19",
                    "Incremento en la población de plagas. Se requiere intervención inmediata.",
                    &plaga_first,
                ),
                InspectionReport::new(
                    "rep-6",
                    "2025-10-03",
                    "Control efectivo de plagas mediante manejo integrado. Mejora notable en la salud del cultivo.",
                    &plaga_first,
                ),
            ],
        },
        Farm {
            id: "finca-san-rafael".to_string(),
            name: "Finca San Rafael".to_string(),
            description: "Cultivo diversificado con aguacate, plátano y especies nativas"
                .to_string(),
            latitude: 5.8041,
            longitude: -75.7755,
            reports: vec![
                InspectionReport::new(
                    "rep-7",
                    "2025-02-28",
                    "Evaluación fitosanitaria rutinaria. Detección temprana de formación de agallas.",
                    &agalla_first,
                ),
                InspectionReport::new(
                    "rep-8",
                    "2025-08-14",
                    "Monitoreo post-tratamiento. Las medidas preventivas han sido efectivas.",
                    &agalla_first,
                ),
                InspectionReport::new(
                    "rep-9",
                    "2025-11-25",
                    "Inspección final del año. El cultivo muestra excelente estado sanitario.",
                    &agalla_first,
                ),
            ],
        },
    ]
}

/// Appends one farm per sheet record after the fixtures, keeping record order.
pub fn merge_sheet_reports(mut farms: Vec<Farm>, records: &[ReportRecord]) -> Vec<Farm> {
    farms.extend(records.iter().enumerate().map(|(index, record)| {
        let offset = index as f64 * SHEET_FARM_STEP;
        Farm {
            id: format!("dynamic-{}", record.id),
            name: record.location.clone(),
            description: record.location.clone(),
            latitude: SHEET_FARM_LATITUDE + offset,
            longitude: SHEET_FARM_LONGITUDE + offset,
            reports: vec![InspectionReport::new(
                &record.id,
                &record.date,
                &record.description,
                &DEFAULT_REPORT_IMAGES,
            )],
        }
    }));
    farms
}

pub fn policy_locations() -> Vec<DocumentLocation> {
    vec![DocumentLocation {
        id: "rionegro".to_string(),
        name: "Rionegro".to_string(),
        description: "Rionegro, Antioquia, Colombia".to_string(),
        latitude: 6.1549,
        longitude: -75.3736,
        pdf_url: "https://docs.google.com/document/d/18uNkEVXedC7iBegmyYoTI8CMcqA11J3r/edit#bookmark=id.hw5gvadvefes".to_string(),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, location: &str) -> ReportRecord {
        ReportRecord {
            id: id.to_string(),
            date: "2025-05-01 14:30:00".to_string(),
            location: location.to_string(),
            description: "Agallas en brotes".to_string(),
        }
    }

    #[test]
    fn test_fixture_farms() {
        let farms = fixture_farms();
        assert_eq!(farms.len(), 3);
        let report_ids: Vec<&str> = farms
            .iter()
            .flat_map(|f| f.reports.iter().map(|r| r.id.as_str()))
            .collect();
        assert_eq!(
            report_ids,
            vec!["rep-1", "rep-2", "rep-3", "rep-4", "rep-5", "rep-6", "rep-7", "rep-8", "rep-9"]
        );
        assert_eq!(farms[0].reports[0].date_label, "15/03/2025");
    }

    #[test]
    fn test_merge_appends_sheet_farms_after_fixtures() {
        let merged = merge_sheet_reports(
            fixture_farms(),
            &[record("report-1", "Vereda Alta"), record("report-2", "Vereda Baja")],
        );
        assert_eq!(merged.len(), 5);

        let first = &merged[3];
        assert_eq!(first.id, "dynamic-report-1");
        assert_eq!(first.name, "Vereda Alta");
        assert_eq!(first.description, "Vereda Alta");
        assert!((first.latitude - 5.7920).abs() < 1e-9);
        assert!((first.longitude + 75.7780).abs() < 1e-9);
        assert_eq!(first.reports.len(), 1);
        assert_eq!(first.reports[0].id, "report-1");
        assert_eq!(first.reports[0].date_label, "01/05/2025 - 2:30 p. m.");
        assert_eq!(first.reports[0].images, DEFAULT_REPORT_IMAGES);

        let second = &merged[4];
        assert!((second.latitude - 5.7930).abs() < 1e-9);
        assert!((second.longitude + 75.7770).abs() < 1e-9);
    }

    #[test]
    fn test_merge_without_records_keeps_fixtures() {
        assert_eq!(merge_sheet_reports(fixture_farms(), &[]), fixture_farms());
    }

    #[test]
    fn test_policy_locations() {
        let locations = policy_locations();
        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].id, "rionegro");
        let view = policy_map_view("https://tiles.example/style.json");
        assert_eq!(view.latitude, locations[0].latitude);
        assert_eq!(view.longitude, locations[0].longitude);
    }
}
