// src/process/project.rs

use crate::schema::{LocalRecord, RawRecord, WorldRecord, LOCAL_PROJECTION, WORLD_PROJECTION};

/// The two reduced views of one city's records. `local[i]` and `world[i]`
/// always come from the same source row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Projection {
    pub local: Vec<LocalRecord>,
    pub world: Vec<WorldRecord>,
}

/// Project each record through the local and world mapping tables, in lockstep.
pub fn project_fields(city_records: &[&RawRecord]) -> Projection {
    let mut out = Projection {
        local: Vec::with_capacity(city_records.len()),
        world: Vec::with_capacity(city_records.len()),
    };

    for record in city_records {
        let (local, world) = project_record(record);
        out.local.push(local);
        out.world.push(world);
    }
    out
}

fn project_record(record: &RawRecord) -> (LocalRecord, WorldRecord) {
    let year = record.year().to_string();

    let mut local = LocalRecord {
        year: year.clone(),
        ..Default::default()
    };
    for &(src, metric) in LOCAL_PROJECTION {
        *local.slot(metric) = record.figure(src);
    }

    let mut world = WorldRecord {
        year,
        ..Default::default()
    };
    for &(src, metric) in WORLD_PROJECTION {
        *world.slot(metric) = record.figure(src);
    }

    (local, world)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Number};

    #[test]
    fn test_projects_all_columns() {
        let rec: RawRecord = serde_json::from_value(json!({
            "Periods": "2016JJ00",
            "Airports": "A043595",
            "CrossCountryFlights_1": 11,
            "LocalFlights_2": 22,
            "TotalPassengers_12": 1000,
            "EuropeTotal_22": 600,
            "Africa_26": 100,
            "America_32": 150,
            "Asia_36": 120,
            "Oceania_40": 30
        }))
        .unwrap();

        let p = project_fields(&[&rec]);
        assert_eq!(
            p.local,
            vec![LocalRecord {
                year: "2016".into(),
                cross_country_flights: Some(11.into()),
                local_flights: Some(22.into()),
            }]
        );
        assert_eq!(
            p.world,
            vec![WorldRecord {
                year: "2016".into(),
                total_passengers: Some(1000.into()),
                europe: Some(600.into()),
                africa: Some(100.into()),
                america: Some(150.into()),
                asia: Some(120.into()),
                oceania: Some(30.into()),
            }]
        );
    }

    #[test]
    fn test_index_parallel_and_passthrough() {
        let recs: Vec<RawRecord> = vec![
            json!({"Periods": "2019JJ00", "Airports": "A043590", "Asia_36": 2.5}),
            json!({"Periods": "2017JJ00", "Airports": "A043590"}),
            json!({"Periods": "2018JJ00", "Airports": "A043590", "LocalFlights_2": null}),
        ]
        .into_iter()
        .map(|v| serde_json::from_value(v).unwrap())
        .collect();
        let refs: Vec<&RawRecord> = recs.iter().collect();

        let p = project_fields(&refs);
        assert_eq!(p.local.len(), refs.len());
        assert_eq!(p.world.len(), refs.len());
        for (l, w) in p.local.iter().zip(&p.world) {
            assert_eq!(l.year, w.year);
        }
        // source order kept, not sorted by year
        let years: Vec<_> = p.local.iter().map(|l| l.year.as_str()).collect();
        assert_eq!(years, vec!["2019", "2017", "2018"]);

        assert_eq!(p.world[0].asia, Number::from_f64(2.5));
        assert_eq!(p.local[2].local_flights, None);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(project_fields(&[]), Projection::default());
    }
}
