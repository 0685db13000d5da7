mod common;

use std::io::Write;

use approx::assert_relative_eq;
use camino::Utf8Path;
use gcg_atlas::{
    constants::{SkyPoint, Year},
    orbits::{
        orbit_table_reader::OrbitElements,
        propagation::{OrbitPropagator, PropagationContext, SamplingGrid},
    },
    AtlasError, AtlasParams, AtlasState, SearchOutcome, ViewState,
};

use common::{assert_view_close, sgra_s1_catalog};

/// Stand-in for the external Kepler solver: a straight line from the origin whose slope is the
/// eccentricity, scaled by elapsed time since t0.
struct LinearPropagator;

impl OrbitPropagator for LinearPropagator {
    fn propagate(
        &self,
        elements: &OrbitElements,
        epochs: &[Year],
        context: &PropagationContext,
    ) -> Result<Vec<SkyPoint>, AtlasError> {
        assert_eq!(context.mass, 4.0e6);
        assert_eq!(context.distance_pc, 8000.0);
        Ok(epochs
            .iter()
            .map(|t| {
                let dt = (t - elements.t0) / elements.period;
                (dt, dt * elements.eccentricity)
            })
            .collect())
    }
}

struct FailingPropagator;

impl OrbitPropagator for FailingPropagator {
    fn propagate(
        &self,
        elements: &OrbitElements,
        _epochs: &[Year],
        _context: &PropagationContext,
    ) -> Result<Vec<SkyPoint>, AtlasError> {
        Err(AtlasError::PropagationFailed {
            star: elements.star_name.clone(),
            reason: "unbound orbit".into(),
        })
    }
}

fn coarse_params() -> AtlasParams {
    AtlasParams::builder()
        .sampling(SamplingGrid::new(2000.0, 2010.0, 1.0).unwrap())
        .build()
        .unwrap()
}

#[test]
fn test_search_scenario() {
    let state = AtlasState::default()
        .with_view(ViewState::new(0.0, 0.0, 0.4).unwrap())
        .load(sgra_s1_catalog(), None);

    let (outcome, state) = state.search("S1");
    assert_eq!(
        outcome,
        SearchOutcome::Found {
            name: "S1".into(),
            x: 0.3,
            y: 0.4,
            index: 1
        }
    );
    assert_view_close(&state.view(), &ViewState::new(0.3, 0.4, 0.4).unwrap(), 0.0);

    let frame = state.frame();
    assert_eq!(frame.axes.x, [0.3 + 0.4, 0.3 - 0.4]);
    assert_eq!(frame.axes.y, [0.4 - 0.4, 0.4 + 0.4]);
    assert_eq!(frame.markers[1].color, "#ffff00");

    let (outcome, unchanged) = state.search("S2");
    assert_eq!(outcome.to_string(), "Star 'S2' not found");
    assert_eq!(unchanged.view(), state.view());
}

#[test]
fn test_load_files_from_disk() {
    let state = AtlasState::new(coarse_params())
        .load_files(
            Utf8Path::new("tests/data/stars.csv"),
            Some(Utf8Path::new("tests/data/orbits.dat")),
            &LinearPropagator,
        )
        .unwrap();

    assert_eq!(
        state.reference_options(),
        vec!["SgrA", "S1", "S0-2", "S0-38", "irs16C"]
    );
    assert_eq!(state.orbits().len(), 3);

    let frame = state.frame();
    assert_eq!(frame.markers.len(), 5);
    assert_eq!(frame.overlays.len(), 3);
    let legends: Vec<_> = frame.overlays.iter().map(|o| o.legend_name.as_str()).collect();
    assert_eq!(legends, vec!["Orbit: S0-2", "Orbit: S0-38", "Orbit: S0-102"]);
    assert_eq!(frame.overlays[0].catalog_index, Some(2));
    assert_eq!(frame.overlays[2].catalog_index, None);

    let s02 = &frame.overlays[0];
    assert_eq!(s02.points.len(), 10);
    assert_relative_eq!(s02.points[0].0, (2000.0 - 2002.33) / 16.05, epsilon = 1e-12);
    assert_relative_eq!(s02.points[9].0, (2010.0 - 2002.33) / 16.05, epsilon = 1e-12);

    let neighbors = state.select_reference("SgrA").unwrap();
    let names: Vec<_> = neighbors.pairs().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["S0-38", "S0-2", "S1", "irs16C"]);
    assert_eq!(neighbors.rows()[2].distance, 0.5);
}

#[test]
fn test_failed_reload_keeps_previous_state() {
    let state = AtlasState::new(coarse_params()).load(sgra_s1_catalog(), None);

    let mut duplicated = tempfile::NamedTempFile::new().unwrap();
    writeln!(duplicated, "name,x,y,xe,ye,vx,vy,vxe,vye,mag,nEpochs").unwrap();
    writeln!(duplicated, "S7,0,0,0,0,0,0,0,0,15,3").unwrap();
    writeln!(duplicated, "S7,1,1,0,0,0,0,0,0,15,3").unwrap();
    let path = Utf8Path::from_path(duplicated.path()).unwrap();

    let err = state
        .load_files(path, None, &LinearPropagator)
        .unwrap_err();
    assert_eq!(err, AtlasError::DuplicateName("S7".into()));

    let err = state
        .load_files(
            Utf8Path::new("tests/data/stars.csv"),
            Some(Utf8Path::new("tests/data/orbits.dat")),
            &FailingPropagator,
        )
        .unwrap_err();
    assert_eq!(
        err,
        AtlasError::PropagationFailed {
            star: "S0-2".into(),
            reason: "unbound orbit".into()
        }
    );

    let err = state
        .load_files(Utf8Path::new("tests/data/missing.csv"), None, &LinearPropagator)
        .unwrap_err();
    assert!(matches!(err, AtlasError::IoError(_)));

    assert_eq!(state.reference_options(), vec!["SgrA", "S1"]);
}

#[test]
fn test_states_are_shareable_across_threads() {
    let state = AtlasState::default().load(sgra_s1_catalog(), None);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let state = state.clone();
            std::thread::spawn(move || state.select_reference("SgrA").unwrap().len())
        })
        .collect();

    for h in handles {
        assert_eq!(h.join().unwrap(), 1);
    }
}

#[test]
fn test_search_skips_star_without_finite_position() {
    let mut table = tempfile::NamedTempFile::new().unwrap();
    writeln!(table, "name,x,y,xe,ye,vx,vy,vxe,vye,mag,nEpochs").unwrap();
    writeln!(table, "SgrA,0,0,0,0,0,0,0,0,14,30").unwrap();
    writeln!(table, "S9,NaN,0.4,0,0,0,0,0,0,17,2").unwrap();
    let path = Utf8Path::from_path(table.path()).unwrap();

    let state = AtlasState::default()
        .load_files(path, None, &LinearPropagator)
        .unwrap();
    let (outcome, after) = state.search("S9");

    assert!(!outcome.found());
    assert_eq!(after.view(), state.view());
    assert_eq!(after.highlight(), None);
}
