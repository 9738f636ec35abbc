use std::collections::HashSet;
use std::path::{Path, PathBuf};

use milsym_primitives::{
	Affiliation, Context, EchelonMobility, MilitarySymbol, Shape, SymbolIdCode, SymbolSet,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::{fixture, rstest};

use crate::{GraphicLayersExt, LayerResolver, ResolveError, ResolverConfig};

const ROOT: &str = "/img";

fn paths(list: &[&str]) -> Vec<PathBuf> {
	list.iter().map(|p| Path::new(ROOT).join(p)).collect()
}

fn oracle(assets: &[&str]) -> HashSet<PathBuf> {
	let mut set: HashSet<PathBuf> = paths(assets).into_iter().collect();
	set.insert(PathBuf::from(ROOT));
	set
}

#[fixture]
fn resolver() -> LayerResolver<HashSet<PathBuf>> {
	LayerResolver::with_oracle(
		ResolverConfig::new(ROOT),
		oracle(&["Frames/0310.svg", "Appendices/Land/10121100.svg"]),
	)
}

fn infantry() -> SymbolIdCode {
	SymbolIdCode::new(SymbolSet::LandUnit, "121100").with_affiliation(Affiliation::Friend)
}

#[test]
fn resolver_is_shareable() {
	fn assert_send_sync<T: Send + Sync>() {}
	assert_send_sync::<LayerResolver>();
}

#[rstest]
fn land_unit_frame_then_main_icon(resolver: LayerResolver<HashSet<PathBuf>>) {
	assert_eq!(
		resolver.graphic_layers(&infantry()).unwrap(),
		paths(&["Frames/0310.svg", "Appendices/Land/10121100.svg"])
	);
}

#[rstest]
fn frame_is_listed_once(resolver: LayerResolver<HashSet<PathBuf>>) {
	let layers = resolver.graphic_layers(&infantry()).unwrap();
	let frames = layers
		.iter()
		.filter(|p| p.starts_with(Path::new(ROOT).join("Frames")))
		.count();
	assert_eq!(frames, 1);
}

#[rstest]
fn amplifiers_follow_main_icon(resolver: LayerResolver<HashSet<PathBuf>>) {
	let id = infantry()
		.with_modifiers("07", "2")
		.with_echelon_mobility(EchelonMobility::TeamCrew);
	assert_eq!(
		resolver.graphic_layers(&id).unwrap(),
		paths(&[
			"Frames/0310.svg",
			"Appendices/Land/10121100.svg",
			"Appendices/Land/mod1/10071.svg",
			"Appendices/Land/mod2/10022.svg",
			"Echelon/0310011.svg",
		])
	);
}

#[rstest]
#[case::unset("00", "")]
#[case::empty("", "00")]
fn unset_modifiers_add_no_layers(
	resolver: LayerResolver<HashSet<PathBuf>>,
	#[case] first: &str,
	#[case] second: &str,
) {
	let id = infantry().with_modifiers(first, second);
	assert_eq!(resolver.graphic_layers(&id).unwrap().len(), 2);
}

#[rstest]
fn frameless_set_has_only_main_icon(resolver: LayerResolver<HashSet<PathBuf>>) {
	let id = SymbolIdCode::new(SymbolSet::ControlMeasure, "110100")
		.with_shape(Shape::Line)
		.with_modifiers("01", "01")
		.with_echelon_mobility(EchelonMobility::Division);
	assert_eq!(
		resolver.graphic_layers(&id).unwrap(),
		paths(&["Appendices/Control Measures/25110100.svg"])
	);
}

#[rstest]
fn area_shape_in_framed_set_skips_amplifiers(resolver: LayerResolver<HashSet<PathBuf>>) {
	let id = infantry()
		.with_shape(Shape::Area)
		.with_modifiers("07", "02")
		.with_echelon_mobility(EchelonMobility::Army);
	assert_eq!(
		resolver.graphic_layers(&id).unwrap(),
		paths(&["Frames/0310.svg", "Appendices/Land/10121100.svg"])
	);
}

#[rstest]
#[case::fallback_only(&["Appendices/Land/10121100_0.svg"], "Appendices/Land/10121100_0.svg")]
#[case::neither(&[], "Appendices/Land/10121100.svg")]
#[case::both(&["Appendices/Land/10121100.svg", "Appendices/Land/10121100_0.svg"], "Appendices/Land/10121100.svg")]
fn main_icon_numbered_part_fallback(#[case] assets: &[&str], #[case] expected: &str) {
	let resolver = LayerResolver::with_oracle(ResolverConfig::new(ROOT), oracle(assets));
	let layers = resolver.graphic_layers(&infantry()).unwrap();
	assert_eq!(layers[1], Path::new(ROOT).join(expected));
}

#[test]
fn missing_assets_are_kept() {
	let resolver = LayerResolver::with_oracle(ResolverConfig::new(ROOT), oracle(&[]));
	let layers = resolver.graphic_layers(&infantry()).unwrap();
	assert_eq!(layers, paths(&["Frames/0310.svg", "Appendices/Land/10121100.svg"]));
}

#[test]
fn missing_root_fails() {
	let resolver = LayerResolver::with_oracle(ResolverConfig::new(ROOT), HashSet::new());
	assert_eq!(
		resolver.graphic_layers(&infantry()),
		Err(ResolveError::ImageRootMissing(PathBuf::from(ROOT)))
	);
}

#[rstest]
#[case::no_symbol_set(SymbolIdCode::default())]
#[case::empty_entity(SymbolIdCode::new(SymbolSet::Air, ""))]
#[case::non_numeric_entity(SymbolIdCode::new(SymbolSet::Air, "11a000"))]
fn invalid_identity_fails(resolver: LayerResolver<HashSet<PathBuf>>, #[case] id: SymbolIdCode) {
	assert!(matches!(
		resolver.graphic_layers(&id),
		Err(ResolveError::InvalidSymbol { .. })
	));
}

#[rstest]
fn set_graphic_layers_replaces_on_success(resolver: LayerResolver<HashSet<PathBuf>>) {
	let mut symbol = MilitarySymbol::new(infantry());
	symbol.replace_graphic_layers(vec![PathBuf::from("stale.svg")]);

	assert!(symbol.set_graphic_layers(&resolver));
	assert_eq!(
		symbol.graphic_layers(),
		paths(&["Frames/0310.svg", "Appendices/Land/10121100.svg"])
	);
}

#[rstest]
fn set_graphic_layers_keeps_layers_on_failure(resolver: LayerResolver<HashSet<PathBuf>>) {
	let mut symbol = MilitarySymbol::new(SymbolIdCode::default());
	symbol.replace_graphic_layers(vec![PathBuf::from("stale.svg")]);

	assert!(!resolver.set_graphic_layers(&mut symbol));
	assert_eq!(symbol.graphic_layers(), [PathBuf::from("stale.svg")]);
}

#[rstest]
fn resolution_is_deterministic(resolver: LayerResolver<HashSet<PathBuf>>) {
	let id = infantry().with_modifiers("07", "00");
	assert_eq!(resolver.graphic_layers(&id), resolver.graphic_layers(&id));
}

#[test]
fn frame_categories_map_shared_frames() {
	let resolver = LayerResolver::new(ResolverConfig::new(ROOT));
	let frame = |affiliation, set| {
		resolver.frame_icon_name_with_folder(Context::Reality, affiliation, set)
	};
	assert_eq!(frame(Affiliation::HostileFaker, SymbolSet::Cyberspace), Path::new("Frames/0600.svg"));
	assert_eq!(frame(Affiliation::Friend, SymbolSet::LandEquipment), Path::new("Frames/0330.svg"));
	assert_eq!(frame(Affiliation::Neutral, SymbolSet::MineWarfare), Path::new("Frames/0435.svg"));
	assert_eq!(
		resolver.frame_icon_name_with_folder(Context::Exercise, Affiliation::Friend, SymbolSet::Air),
		Path::new("Frames/0301.svg")
	);
}

#[test]
fn unmapped_tables_give_empty_segments() {
	let mut config = ResolverConfig::new(ROOT);
	config.folder_names.remove(&SymbolSet::LandUnit);
	config.frame_categories.remove(&SymbolSet::LandUnit);
	let resolver = LayerResolver::with_oracle(config, oracle(&[]));

	assert_eq!(
		resolver.graphic_layers(&infantry()).unwrap(),
		paths(&["Frames/03.svg", "Appendices/10121100.svg"])
	);
}

#[test]
fn path_helpers() {
	let resolver = LayerResolver::new(ResolverConfig::new(ROOT));
	assert_eq!(resolver.icon_folder_name(SymbolSet::SeaSurface), Path::new("Appendices/Sea Surface"));
	assert_eq!(
		resolver.main_icon_path(&SymbolIdCode::new(SymbolSet::Air, "110000")),
		Some(Path::new(ROOT).join("Appendices/Air/01110000.svg"))
	);
	assert_eq!(
		resolver.modifier_icon_path(SymbolSet::Air, 2, "5"),
		Some(Path::new(ROOT).join("Appendices/Air/mod2/01052.svg"))
	);
	assert_eq!(resolver.modifier_icon_name_with_folder(SymbolSet::Air, 3, "05"), None);
	assert_eq!(
		resolver.echelon_icon_path(
			Affiliation::Friend,
			Some(SymbolSet::LandUnit),
			Default::default(),
			EchelonMobility::Brigade,
		),
		Some(Path::new(ROOT).join("Echelon/0310018.svg"))
	);
}

fn arb_multipoint_identity() -> impl Strategy<Value = SymbolIdCode> {
	(
		prop::sample::select(SymbolSet::all().collect::<Vec<_>>()),
		prop::sample::select(vec![Shape::Line, Shape::Area]),
		"[0-9]{6}",
		"[0-9]{2}",
		"[0-9]{2}",
		prop::sample::select(EchelonMobility::all().collect::<Vec<_>>()),
	)
		.prop_map(|(set, shape, entity, first, second, echelon)| {
			SymbolIdCode::new(set, entity)
				.with_shape(shape)
				.with_modifiers(first, second)
				.with_echelon_mobility(echelon)
		})
}

fn arb_point_identity() -> impl Strategy<Value = SymbolIdCode> {
	(
		prop::sample::select(SymbolSet::all().collect::<Vec<_>>()),
		prop::sample::select(Affiliation::all().collect::<Vec<_>>()),
		"[0-9]{6}",
		"[0-9]{2}",
	)
		.prop_map(|(set, affiliation, entity, first)| {
			SymbolIdCode::new(set, entity)
				.with_affiliation(affiliation)
				.with_modifiers(first, "00")
		})
}

proptest! {
	#[test]
	fn point_symbols_without_echelon(id in arb_point_identity()) {
		let resolver = LayerResolver::with_oracle(ResolverConfig::new(ROOT), oracle(&[]));
		let layers = resolver.graphic_layers(&id).unwrap();
		let root = Path::new(ROOT);

		prop_assert!(!layers.iter().any(|layer| layer.starts_with(root.join("Echelon"))));

		let main_icon = if id.symbol_set.is_some_and(SymbolSet::has_frame) {
			prop_assert!(layers[0].starts_with(root.join("Frames")));
			&layers[1]
		} else {
			prop_assert_eq!(layers.len(), 1);
			&layers[0]
		};
		prop_assert!(main_icon.starts_with(root.join("Appendices")));
		let suffix = format!("{}.svg", id.entity_code);
		let file_name = main_icon.file_name().and_then(|name| name.to_str()).unwrap_or_default();
		prop_assert!(file_name.ends_with(&suffix), "{:?}", main_icon);
	}

	#[test]
	fn multipoint_shapes_never_get_amplifiers(id in arb_multipoint_identity()) {
		let resolver = LayerResolver::with_oracle(ResolverConfig::new(ROOT), oracle(&[]));
		let layers = resolver.graphic_layers(&id).unwrap();

		let expected = if id.symbol_set.is_some_and(SymbolSet::has_frame) { 2 } else { 1 };
		prop_assert_eq!(layers.len(), expected);
		for layer in &layers {
			prop_assert!(!layer.starts_with(Path::new(ROOT).join("Echelon")));
			prop_assert!(layer.parent().is_none_or(|dir| !dir.ends_with("mod1") && !dir.ends_with("mod2")));
		}
	}
}
