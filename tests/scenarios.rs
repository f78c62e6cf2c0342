use smogmeans::*;

fn read(export: &Export, j: usize) -> String {
    std::fs::read_to_string(export.path(j)).expect("exported file")
}

#[test]
fn separated_pair_exports_one_line_each() {
    let dir = tempfile::tempdir().expect("tempdir");
    let export = Export::new(dir.path());
    let mut engine = Engine::new(
        vec![
            Observation::from((1., 1., 1., 5.)),
            Observation::from((10., 10., 10., 50.)),
        ],
        [Centroid::from((0., 0., 0.)), Centroid::from((9., 9., 9.))],
    );
    let summary = engine.run(&export).expect("both clusters populated");
    assert_eq!(summary.iterations, 3);
    assert_eq!(
        engine.kmeans(),
        &[Centroid::from((1., 1., 1.)), Centroid::from((10., 10., 10.))]
    );
    assert_eq!(read(&export, 0), "1.0,1.0,1.0,5.0\n");
    assert_eq!(read(&export, 1), "10.0,10.0,10.0,50.0\n");
}

#[test]
fn identical_readings_leave_a_cluster_empty() {
    let dataset = (0..8)
        .map(|i| Observation::from((4., 4., 4., i as f64)))
        .collect::<Vec<_>>();
    let mut engine = Engine::new(
        dataset,
        [Centroid::from((5., 5., 5.)), Centroid::from((50., 50., 50.))],
    );
    assert!(engine.assign_all());
    assert_eq!(engine.populations(), [8, 0]);
    assert!(matches!(
        engine.converge(),
        Err(ClusterError::EmptyCluster { index: 1 })
    ));
}

#[test]
fn export_covers_every_assigned_observation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let export = Export::new(dir.path());
    let dataset = (0..4)
        .flat_map(|j| {
            let base = 100. * j as f64;
            (0..16).map(move |i| Observation::from((base + i as f64 * 0.5, base, base, i as f64)))
        })
        .collect::<Vec<_>>();
    let kmeans = std::array::from_fn(|j| Centroid::from(*dataset[j * 16].pollution()));
    let mut engine = Engine::<4>::new(dataset, kmeans);
    engine.run(&export).expect("well separated groups");
    assert_eq!(engine.populations(), [16; 4]);
    let lines = (0..4)
        .map(|j| read(&export, j))
        .collect::<Vec<_>>();
    for (j, text) in lines.iter().enumerate() {
        let rows = text.lines().collect::<Vec<_>>();
        assert_eq!(rows.len(), 16);
        assert!(rows.iter().all(|row| row.split(',').count() == 4));
        let expected = engine
            .dataset()
            .iter()
            .filter(|x| x.cluster() == Some(j))
            .map(Observation::to_string)
            .collect::<Vec<_>>();
        assert_eq!(rows, expected);
    }
}

#[test]
fn loads_runs_and_exports_from_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let observations = dir.path().join("observations.csv");
    let centroids = dir.path().join("centroids.csv");
    std::fs::write(
        &observations,
        "nitric_oxide,sulphur_dioxide,ozone,hire_time\n1,1,1,5\n2,2,2,6\n20,20,20,7\n21,21,21,8\n",
    )
    .expect("write observations");
    std::fs::write(&centroids, "nitric_oxide,sulphur_dioxide,ozone\n0,0,0\n30,30,30\n")
        .expect("write centroids");
    let export = Export::new(dir.path());
    let mut engine = Engine::new(
        load_observations(&observations).expect("observations"),
        load_centroids::<2>(&centroids).expect("centroids"),
    );
    engine.run(&export).expect("converges");
    assert_eq!(read(&export, 0), "1.0,1.0,1.0,5.0\n2.0,2.0,2.0,6.0\n");
    assert_eq!(read(&export, 1), "20.0,20.0,20.0,7.0\n21.0,21.0,21.0,8.0\n");
}
