use rusqlite::{params, Connection};

use crate::db::DatabaseError;
use crate::models::{NewPrescription, Prescription};

/// Insert a prescription row and return the store-assigned id.
pub fn insert_prescription(
    conn: &Connection,
    prescription: &NewPrescription,
) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO prescriptions
         (patient_id, disease, namaste_code, icd_code, biomedicine, description, medication)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            prescription.patient_id,
            prescription.disease,
            prescription.namaste_code,
            prescription.icd_code,
            prescription.biomedicine,
            prescription.description,
            prescription.medication,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All prescriptions for one patient, oldest first.
pub fn prescriptions_for_patient(
    conn: &Connection,
    patient_id: i64,
) -> Result<Vec<Prescription>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, patient_id, disease, namaste_code, icd_code,
                IFNULL(description, ''), IFNULL(medication, ''), IFNULL(biomedicine, '')
         FROM prescriptions WHERE patient_id = ?1 ORDER BY id",
    )?;
    let rows = stmt.query_map([patient_id], |row| {
        Ok(Prescription {
            id: row.get(0)?,
            patient_id: row.get(1)?,
            disease: row.get(2)?,
            namaste_code: row.get(3)?,
            icd_code: row.get(4)?,
            description: row.get(5)?,
            medication: row.get(6)?,
            biomedicine: row.get(7)?,
        })
    })?;
    Ok(rows.collect::<rusqlite::Result<_>>()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::patient::insert_patient;
    use crate::db::sqlite::open_memory_database;
    use crate::models::NewPatient;

    fn registered_patient(conn: &Connection) -> i64 {
        insert_patient(
            conn,
            &NewPatient {
                name: "Asha".into(),
                age: "34".into(),
                gender: "F".into(),
                address: "Pune".into(),
                contact: "98x".into(),
                admission_date: "2024-01-10".into(),
                room: "12".into(),
            },
        )
        .unwrap()
    }

    fn prescription(patient_id: i64, disease: &str) -> NewPrescription {
        NewPrescription {
            patient_id,
            disease: disease.into(),
            namaste_code: "N01".into(),
            icd_code: "I01".into(),
            description: "three days of fever".into(),
            medication: "Sudarshan churna".into(),
            biomedicine: "Pyrexia".into(),
        }
    }

    #[test]
    fn insert_assigns_increasing_ids() {
        let conn = open_memory_database().unwrap();
        let patient_id = registered_patient(&conn);
        let first = insert_prescription(&conn, &prescription(patient_id, "Jwara")).unwrap();
        let second = insert_prescription(&conn, &prescription(patient_id, "Cold")).unwrap();
        assert!(second > first);
    }

    #[test]
    fn round_trips_all_fields() {
        let conn = open_memory_database().unwrap();
        let patient_id = registered_patient(&conn);
        insert_prescription(&conn, &prescription(patient_id, "Jwara")).unwrap();

        let stored = prescriptions_for_patient(&conn, patient_id).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].disease, "Jwara");
        assert_eq!(stored[0].namaste_code, "N01");
        assert_eq!(stored[0].icd_code, "I01");
        assert_eq!(stored[0].medication, "Sudarshan churna");
        assert_eq!(stored[0].biomedicine, "Pyrexia");
    }

}
