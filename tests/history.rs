use raster_paint::primitives::stamp;
use raster_paint::{CanvasError, Color, History, PixelBuffer, Point};

fn setup(width: u32, height: u32, capacity: usize) -> (PixelBuffer, History) {
    let buffer = PixelBuffer::new(width, height, Color::WHITE);
    let history = History::new(buffer.copy(), capacity);
    (buffer, history)
}

#[test]
fn test_new_history_has_only_initial_state() {
    let (buffer, history) = setup(4, 4, 50);
    assert_eq!(history.len(), 1);
    assert_eq!(history.index(), 0);
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert_eq!(history.current(), &buffer.copy());
}

#[test]
fn test_undo_and_redo_a_stamp() {
    let (mut buffer, mut history) = setup(100, 100, 50);
    let blank = buffer.clone();

    stamp(&mut buffer, Point::new(50, 50), Color::BLACK, 3);
    history.commit(&buffer);
    let stamped = buffer.clone();

    assert!(history.undo(&mut buffer).unwrap());
    assert_eq!(buffer, blank);
    assert!(history.can_redo());

    assert!(history.redo(&mut buffer).unwrap());
    assert_eq!(buffer, stamped);
    assert!(!history.can_redo());
}

#[test]
fn test_undo_then_redo_is_identity() {
    let (mut buffer, mut history) = setup(10, 10, 50);
    for i in 0..5 {
        buffer.set(i, i, Color::RED).unwrap();
        history.commit(&buffer);
    }
    history.undo(&mut buffer).unwrap();
    history.undo(&mut buffer).unwrap();
    let middle = buffer.clone();

    history.undo(&mut buffer).unwrap();
    history.redo(&mut buffer).unwrap();
    assert_eq!(buffer, middle);
}

#[test]
fn test_boundaries_are_noops() {
    let (mut buffer, mut history) = setup(4, 4, 50);
    let before = buffer.clone();

    assert_eq!(history.undo(&mut buffer), Ok(false));
    assert_eq!(history.redo(&mut buffer), Ok(false));
    assert_eq!(buffer, before);
    assert_eq!(history.index(), 0);
}

#[test]
fn test_commit_after_undo_drops_redo_branch() {
    let (mut buffer, mut history) = setup(4, 4, 50);

    buffer.set(0, 0, Color::RED).unwrap();
    history.commit(&buffer); // A
    buffer.set(1, 0, Color::GREEN).unwrap();
    history.commit(&buffer); // B

    history.undo(&mut buffer).unwrap();
    buffer.set(2, 0, Color::BLUE).unwrap();
    history.commit(&buffer); // C
    let c = buffer.clone();

    assert_eq!(history.len(), 3);
    assert!(!history.can_redo());
    assert_eq!(history.redo(&mut buffer), Ok(false));
    assert_eq!(buffer, c);
    assert_eq!(buffer.get(1, 0).unwrap(), Color::WHITE);

    history.undo(&mut buffer).unwrap();
    assert_eq!(buffer.get(0, 0).unwrap(), Color::RED);
    assert_eq!(buffer.get(2, 0).unwrap(), Color::WHITE);
}

#[test]
fn test_capacity_evicts_oldest() {
    let (mut buffer, mut history) = setup(10, 1, 5);
    for i in 1..=6 {
        buffer.set(i, 0, Color::BLACK).unwrap();
        history.commit(&buffer);
    }

    assert_eq!(history.len(), 5);
    assert_eq!(history.index(), 4);

    // The initial state and the first commit are gone
    let oldest = history.entries().next().unwrap();
    assert_eq!(oldest.get(2, 0).unwrap(), Color::BLACK);
    assert_eq!(oldest.get(3, 0).unwrap(), Color::WHITE);

    for _ in 0..4 {
        assert!(history.undo(&mut buffer).unwrap());
    }
    assert_eq!(history.undo(&mut buffer), Ok(false));
    assert_eq!(buffer.get(1, 0).unwrap(), Color::BLACK);
    assert_eq!(buffer.get(3, 0).unwrap(), Color::WHITE);
}

#[test]
fn test_default_capacity_holds_fifty() {
    let (mut buffer, mut history) = setup(60, 1, raster_paint::command::DEFAULT_CAPACITY);
    for i in 0..51 {
        buffer.set(i, 0, Color::BLACK).unwrap();
        history.commit(&buffer);
        assert!(history.len() <= 50);
    }
    assert_eq!(history.len(), 50);
    assert_eq!(history.index(), 49);

    let mut undos = 0;
    while history.undo(&mut buffer).unwrap() {
        undos += 1;
    }
    assert_eq!(undos, 49);
}

#[test]
fn test_capacity_of_zero_keeps_one_entry() {
    let (mut buffer, mut history) = setup(4, 4, 0);
    buffer.set(0, 0, Color::BLACK).unwrap();
    history.commit(&buffer);

    assert_eq!(history.capacity(), 1);
    assert_eq!(history.len(), 1);
    assert_eq!(history.current(), &buffer.copy());
    assert!(!history.can_undo());
}

#[test]
fn test_undo_into_wrong_size_buffer_fails() {
    let (mut buffer, mut history) = setup(4, 4, 50);
    buffer.set(0, 0, Color::BLACK).unwrap();
    history.commit(&buffer);

    let mut other = PixelBuffer::new(5, 5, Color::WHITE);
    assert_eq!(
        history.undo(&mut other),
        Err(CanvasError::DimensionMismatch { expected: (5, 5), found: (4, 4) })
    );
    // The cursor did not move
    assert_eq!(history.index(), 1);
}
