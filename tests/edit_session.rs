use carindex::def::consts::*;
use carindex::editor::{self, Edit, Widget};
use carindex::tables::Tables;
use carindex::{CarIndex, CarRecord, Field};
use std::fs;
use std::path::PathBuf;

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("carindex-{}-{name}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn make_car(name_id: &[u8], full_name: &[u8], enum_c: u32) -> [u8; RECORD_SIZE] {
    let mut car = [0u8; RECORD_SIZE];
    car[..name_id.len()].copy_from_slice(name_id);
    for (i, &c) in full_name.iter().enumerate() {
        car[FULL_CAR_NAME_OFFSET + 2 * i] = c;
    }
    car[ENUM_C_OFFSET..ENUM_C_OFFSET + 4].copy_from_slice(&enum_c.to_le_bytes());
    car[ZERO_TWO_OFFSET] = 2;
    car
}

fn make_file() -> Vec<u8> {
    let mut data = vec![0x7F; RECORD_SIZE];
    data.extend_from_slice(&make_car(b"fiat_500", b"FIAT 500", 1));
    data.extend_from_slice(&make_car(b"ford_t", b"FORD T", 99));
    let mut trailer = [0x33u8; RECORD_SIZE];
    trailer[0] = 0;
    data.extend_from_slice(&trailer);
    data
}

#[test]
fn unedited_file_is_written_back_unchanged() {
    let dir = temp_dir("unchanged");
    let path = dir.join("carindex.def");
    let original = make_file();
    fs::write(&path, &original).unwrap();

    let index = CarIndex::load(&path).unwrap();
    assert_eq!(index.car_names(), vec!["fiat_500", "ford_t"]);
    index.save(&path).unwrap();

    assert_eq!(fs::read(&path).unwrap(), original);
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn edit_add_remove_and_reload() {
    let dir = temp_dir("session");
    let path = dir.join("carindex.def");
    fs::write(&path, make_file()).unwrap();
    fs::write(dir.join("headers.txt"), "enumC=Speed\nseatCount=Seats\n").unwrap();
    fs::write(dir.join("enums.txt"), "[enumC]\nFAST=1\nSLOW=2\n").unwrap();

    let tables = Tables::load(dir.join("headers.txt"), dir.join("enums.txt")).unwrap();
    let mut index = CarIndex::load(&path).unwrap();

    // the second car holds a value the enum does not define
    let form = editor::view(index.get(1).unwrap(), &tables);
    let speed = form.iter().find(|v| v.field == Field::EnumC).unwrap();
    assert_eq!(speed.label, "Speed");
    match &speed.widget {
        Widget::Choice(choices) => assert_eq!(choices.selected().name, "FAST"),
        other => panic!("unexpected widget {other:?}"),
    }
    assert_eq!(index.get(1).unwrap().enum_c, 99);

    let car = index.get_mut(1).unwrap();
    let rejected = editor::commit(
        car,
        &[
            (Field::EnumC, Edit::Choice(2)),
            (Field::SeatCount, Edit::Text("2".to_string())),
            (Field::Zero, Edit::Text("zz".to_string())),
            (Field::FullCarName, Edit::Text("FORD MODEL T".to_string())),
        ],
    );
    assert_eq!(rejected.len(), 1);

    index.push(CarRecord::new_car());
    index.remove(0).unwrap();
    index.save(&path).unwrap();

    assert_eq!(fs::metadata(&path).unwrap().len(), (RECORD_SIZE * 4) as u64);

    let reloaded = CarIndex::load(&path).unwrap();
    assert_eq!(reloaded, index);
    assert_eq!(reloaded.car_names(), vec!["ford_t", "NewCar"]);
    let ford = reloaded.get(0).unwrap();
    assert_eq!(ford.enum_c, 2);
    assert_eq!(ford.seat_count, 2);
    assert_eq!(ford.zero, 0);
    assert_eq!(editor::display(ford, Field::FullCarName), "FORD MODEL T");
    assert_eq!(editor::display(ford, Field::ZeroTwo), "02");
    assert_eq!(reloaded.head.0, [0x7F; RECORD_SIZE]);
    assert_eq!(reloaded.end.0[1], 0x33);

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn missing_tables_degrade_to_field_names() {
    let dir = temp_dir("no-tables");
    let tables = Tables::load(dir.join("headers.txt"), dir.join("enums.txt")).unwrap();
    assert!(tables.labels.is_empty());
    assert!(tables.enums.is_empty());

    let mut car = CarRecord::new_car();
    car.enum_a1 = 0x1F;
    let form = editor::view(&car, &tables);
    assert_eq!(form[4].label, "enumA1");
    match &form[4].widget {
        Widget::Choice(choices) => {
            assert_eq!(choices.options().len(), 1);
            assert_eq!(choices.selected().name, "0x1F");
        }
        other => panic!("unexpected widget {other:?}"),
    }
    fs::remove_dir_all(dir).unwrap();
}
