//! Registration pipeline integration tests
//!
//! Exercises the crate the way an editor config would: a batch of labelled
//! declarations across mixed entry points, group overrides, and a single
//! terminal flush.

use bindery::{MapError, MapOpts, MapSet, Recorder, Rhs, Wrap};

/// A realistic config block: file ops, windows, and a plug-mapping
fn declare_sample(maps: &mut MapSet) {
    maps.desc("Save file")
        .set("s", ("write", MapOpts::new().wrap(Wrap::Cmd)))
        .unwrap();
    maps.desc("Quit")
        .set("q", ("quitall", MapOpts::new().wrap(Wrap::Cmd)))
        .unwrap();
    maps.split(&MapOpts::new().modes("n")).unwrap();

    maps.desc("Window below");
    maps.ctrl().set("j", ("wincmd j", MapOpts::new().wrap(Wrap::Cmd)))
        .unwrap();
    maps.desc("Window above");
    maps.ctrl().set("k", ("wincmd k", MapOpts::new().wrap(Wrap::Cmd)))
        .unwrap();
    maps.split(&MapOpts::new().modes("n").silent(true)).unwrap();

    maps.desc("Toggle comment");
    maps.leader()
        .set("c", ("", MapOpts::new().plug("commentary").modes("n")))
        .unwrap();
}

#[test]
fn full_config_registers_in_declaration_order() {
    let mut maps = MapSet::new();
    declare_sample(&mut maps);

    let mut backend = Recorder::new();
    let emitted = maps.register(&mut backend, &MapOpts::new()).unwrap();

    assert_eq!(emitted, 5);
    assert_eq!(
        backend.keys(),
        vec!["s", "q", "<C-j>", "<C-k>", "<leader>c"]
    );
    assert!(maps.is_empty());
}

#[test]
fn group_overrides_stay_in_their_group() {
    let mut maps = MapSet::new();
    declare_sample(&mut maps);

    let mut backend = Recorder::new();
    maps.register(&mut backend, &MapOpts::new()).unwrap();

    // silent came from the second split only
    assert_eq!(backend.find("s").unwrap().silent, None);
    assert_eq!(backend.find("<C-j>").unwrap().silent, Some(true));
    // both groups got their own modes
    assert_eq!(backend.find("q").unwrap().mode, Some('n'));
    assert_eq!(backend.find("<C-k>").unwrap().mode, Some('n'));
}

#[test]
fn flush_override_reaches_past_split_dividers() {
    let mut maps = MapSet::new();
    maps.set("a", "one").unwrap();
    maps.split(&MapOpts::new().modes("n")).unwrap();
    maps.set("b", "two").unwrap();

    let mut backend = Recorder::new();
    maps.register(&mut backend, &MapOpts::new().remap(true))
        .unwrap();

    // split scoped its modes to the first group, but the flush-time
    // override applies uniformly on both sides of the divider
    assert_eq!(backend.find("a").unwrap().noremap, Some(false));
    assert_eq!(backend.find("b").unwrap().noremap, Some(false));
    assert_eq!(backend.find("b").unwrap().mode, None);
}

#[test]
fn labels_never_leak_across_declarations() {
    let mut maps = MapSet::new();
    maps.desc("Only for a").set("a", "ActionA").unwrap();
    maps.set("b", ("ActionB", MapOpts::new())).unwrap();
    maps.ctrl().set("c", "Display only").unwrap();

    let mut backend = Recorder::new();
    maps.register(&mut backend, &MapOpts::new()).unwrap();

    assert_eq!(backend.find("a").unwrap().label.as_deref(), Some("Only for a"));
    // b had no pending label, so its bare string became the label
    assert_eq!(backend.find("b").unwrap().label.as_deref(), Some("ActionB"));
    assert_eq!(backend.find("b").unwrap().rhs, Rhs::empty());
    assert_eq!(
        backend.find("<C-c>").unwrap().label.as_deref(),
        Some("Display only")
    );
}

#[test]
fn modifier_chains_cover_pairwise_and_triple_combinations() {
    let mut maps = MapSet::new();
    maps.ctrl().set("1", "l").unwrap();
    maps.alt().set("1", "l").unwrap();
    maps.shift().set("1", "l").unwrap();
    maps.ctrl().alt().set("1", "l").unwrap();
    maps.ctrl().shift().set("1", "l").unwrap();
    maps.alt().shift().set("1", "l").unwrap();
    maps.ctrl().alt().shift().set("1", "l").unwrap();
    maps.leader().ctrl().alt().shift().set("1", "l").unwrap();

    let mut backend = Recorder::new();
    maps.register(&mut backend, &MapOpts::new()).unwrap();

    assert_eq!(
        backend.keys(),
        vec![
            "<C-1>",
            "<A-1>",
            "<S-1>",
            "<C-A-1>",
            "<C-S-1>",
            "<A-S-1>",
            "<C-A-S-1>",
            "<leader><C-A-S-1>",
        ]
    );
}

#[test]
fn last_instant_mutation_through_register_each() {
    let mut maps = MapSet::new();
    maps.desc("One").set("a", ("x", MapOpts::new().modes("nv"))).unwrap();

    let mut seen = Vec::new();
    let mut backend = Recorder::new();
    maps.register_with(&mut backend, &MapOpts::new(), |key, args| {
        seen.push((key.to_string(), args.mode));
        args.silent = Some(true);
    })
    .unwrap();

    // Callback ran once per emitted record, after mode fan-out
    assert_eq!(
        seen,
        vec![("a".to_string(), Some('n')), ("a".to_string(), Some('v'))]
    );
    assert!(backend.records.iter().all(|(_, a)| a.silent == Some(true)));
}

#[test]
fn declaration_errors_fail_fast_and_keep_state_clean() {
    let mut maps = MapSet::new();
    maps.set("ok", "fine").unwrap();

    assert_eq!(maps.set("", "bad").unwrap_err(), MapError::EmptyKey);
    assert!(matches!(
        maps.set("x", ("rhs", MapOpts::new().modes("nz"))).unwrap_err(),
        MapError::InvalidMode { mode: 'z', .. }
    ));
    assert!(matches!(
        maps.set("x", ("rhs", MapOpts::new().plug(""))).unwrap_err(),
        MapError::EmptyPlug { .. }
    ));

    // Only the valid declaration survives
    assert_eq!(maps.len(), 1);
}

#[test]
fn custom_leader_applies_at_flush_time() {
    let mut maps = MapSet::with_leader(",");
    maps.leader().set("f", "Find").unwrap();

    let mut backend = Recorder::new();
    maps.register(&mut backend, &MapOpts::new()).unwrap();
    assert_eq!(backend.keys(), vec![",f"]);
}
