use raster_paint::{CanvasEngine, Color, Command, EngineConfig, InputEvent, Point, ShapeStyle, Tool, ToolSettings};

fn scribble(engine: &mut CanvasEngine, from: (i32, i32), to: (i32, i32)) {
    engine.handle_input(InputEvent::PointerDown(from.into())).unwrap();
    engine.handle_input(InputEvent::PointerMove(to.into())).unwrap();
    engine.handle_input(InputEvent::PointerUp(to.into())).unwrap();
}

#[test]
fn test_engine_starts_blank() {
    let engine = CanvasEngine::with_size(32, 24);
    assert_eq!(engine.dimensions(), (32, 24));
    assert!(engine.snapshot().pixels().iter().all(|&c| c == Color::WHITE));
    assert_eq!(engine.history().len(), 1);
    assert_eq!(*engine.settings(), ToolSettings::default());
}

#[test]
fn test_clear_is_undoable() {
    let mut engine = CanvasEngine::with_size(32, 24);
    scribble(&mut engine, (2, 2), (20, 20));
    let drawing = engine.snapshot();

    engine.execute(Command::Clear).unwrap();
    assert!(engine.snapshot().pixels().iter().all(|&c| c == Color::WHITE));
    assert_eq!(engine.history().len(), 3);

    engine.execute(Command::Undo).unwrap();
    assert_eq!(engine.snapshot(), drawing);
    engine.execute(Command::Redo).unwrap();
    assert!(engine.snapshot().pixels().iter().all(|&c| c == Color::WHITE));
}

#[test]
fn test_undo_redo_walk_the_history() {
    let mut engine = CanvasEngine::with_size(32, 24);
    let blank = engine.snapshot();
    scribble(&mut engine, (1, 1), (10, 1));
    let first = engine.snapshot();
    scribble(&mut engine, (1, 10), (10, 10));
    let second = engine.snapshot();

    assert_eq!(engine.undo(), Ok(true));
    assert_eq!(engine.snapshot(), first);
    assert_eq!(engine.undo(), Ok(true));
    assert_eq!(engine.snapshot(), blank);
    assert_eq!(engine.undo(), Ok(false));

    assert_eq!(engine.redo(), Ok(true));
    assert_eq!(engine.redo(), Ok(true));
    assert_eq!(engine.snapshot(), second);
    assert_eq!(engine.redo(), Ok(false));
}

#[test]
fn test_undo_at_start_is_harmless() {
    let mut engine = CanvasEngine::with_size(8, 8);
    assert!(engine.execute(Command::Undo).is_ok());
    assert!(engine.execute(Command::Redo).is_ok());
    assert_eq!(engine.history().index(), 0);
}

#[test]
fn test_settings_commands() {
    let mut engine = CanvasEngine::with_size(8, 8);
    engine.execute(Command::SetTool(Tool::Circle)).unwrap();
    engine.execute(Command::SetColor(Color::PURPLE)).unwrap();
    engine.execute(Command::SetThickness(7)).unwrap();
    engine.execute(Command::SetShapeStyle(ShapeStyle::Filled)).unwrap();

    assert_eq!(
        *engine.settings(),
        ToolSettings {
            tool: Tool::Circle,
            color: Color::PURPLE,
            thickness: 7,
            shape_style: ShapeStyle::Filled,
        }
    );
    // Settings changes are not canvas edits
    assert_eq!(engine.history().len(), 1);
}

#[test]
fn test_configured_background_and_bounds() {
    let config = EngineConfig {
        canvas_width: 16,
        canvas_height: 16,
        background: Color::CYAN,
        history_capacity: 3,
        min_thickness: 2,
        max_thickness: 6,
        ..EngineConfig::default()
    };
    let mut engine = CanvasEngine::new(config);
    assert!(engine.snapshot().pixels().iter().all(|&c| c == Color::CYAN));
    assert_eq!(engine.thickness_bounds(), (2, 6));

    engine.execute(Command::SetThickness(1)).unwrap();
    assert_eq!(engine.settings().thickness, 2);

    for i in 0..5 {
        scribble(&mut engine, (i, 0), (i, 15));
    }
    assert_eq!(engine.history().len(), 3);

    engine.execute(Command::SetTool(Tool::Eraser)).unwrap();
    engine.execute(Command::Clear).unwrap();
    engine.execute(Command::SetTool(Tool::Pen)).unwrap();
    scribble(&mut engine, (8, 8), (8, 8));
    engine.execute(Command::SetTool(Tool::Eraser)).unwrap();
    scribble(&mut engine, (8, 8), (8, 8));
    assert!(engine.snapshot().pixels().iter().all(|&c| c == Color::CYAN));
}

#[test]
fn test_restored_settings_are_clamped() {
    let mut engine = CanvasEngine::with_size(8, 8);
    engine.apply_settings(ToolSettings {
        tool: Tool::Line,
        thickness: 500,
        ..ToolSettings::default()
    });
    assert_eq!(engine.settings().tool, Tool::Line);
    assert_eq!(engine.settings().thickness, 20);
}

#[test]
fn test_revision_moves_with_visible_changes() {
    let mut engine = CanvasEngine::with_size(8, 8);
    let start = engine.revision();

    engine.handle_input(InputEvent::PointerMove(Point::new(3, 3))).unwrap();
    let hovered = engine.revision();
    assert!(hovered > start);

    // The brush cursor changes color with the settings
    engine.execute(Command::SetColor(Color::RED)).unwrap();
    let recolored = engine.revision();
    assert!(recolored > hovered);

    engine.execute(Command::Undo).unwrap();
    assert_eq!(engine.revision(), recolored);

    engine.execute(Command::Clear).unwrap();
    assert!(engine.revision() > recolored);
}
