use crate::errors::{ObjsensError, ObjsensResult};
use crate::ownprog;
use crate::prelude::*;
use clap::ArgMatches;
use serde::Serialize;
use std::fs::File;
use std::io::Write;

#[derive(Debug, Serialize)]
struct CloneReport {
    original: String,
    clone: String,
    methods: usize,
    reachable_methods: usize,
}

pub fn run(args: &ArgMatches) -> ObjsensResult<()> {
    init_logger(args);

    let input = args
        .get_one::<String>("input")
        .ok_or_else(|| ObjsensError::BadArguments("--input needed".to_string()))?;
    let doc = ownprog::open(input)?;
    let mut program = ownprog::load(&doc)?;

    let names: Vec<String> = args
        .get_many::<String>("class")
        .map(|names| names.cloned().collect())
        .unwrap_or_default();
    let mut targets = Vec::new();
    for name in &names {
        targets.push((name.clone(), program.scene.lookup_class(name)?.uid()));
    }

    let mut handles = Vec::new();
    {
        let mut cloner = ClassCloner::new(
            &mut program.scene,
            &mut program.api,
            &mut program.project,
            &program.reachable,
            &mut program.strings,
        );
        for (name, uid) in &targets {
            log::info!("specializing class {name}");
            handles.push((name.clone(), cloner.clone_class(*uid)?));
        }
    }

    let reports: Vec<CloneReport> = handles
        .iter()
        .map(|(name, handle)| {
            let clone = &program.scene[handle.cloned_class()];
            CloneReport {
                original: name.clone(),
                clone: clone.name().to_string(),
                methods: clone.method_uids().len(),
                reachable_methods: handle.reachable_cloned_methods().len(),
            }
        })
        .collect();

    let report = serde_json::to_string_pretty(&reports)?;
    if let Some(output) = args.get_one::<String>("output") {
        let mut file = File::create(output)?;
        file.write_all(report.as_bytes())?;
        log::info!("report written in {:?}", output);
    } else {
        println!("{report}");
    }

    if let Some(dot_filename) = args.get_one::<String>("dot") {
        let mut file = File::create(dot_filename)?;
        file.write_all(program.scene.hierarchy_dot().as_bytes())?;
        log::info!("dot output written in {:?}", dot_filename);
    }

    Ok(())
}
