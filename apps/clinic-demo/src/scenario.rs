use anyhow::Result;

use appointment_cell::models::{Appointment, RegistryReport};
use appointment_cell::services::AppointmentRegistryService;
use doctor_cell::models::{Cardiologist, GeneralPractitioner, Professional, SharedProfessional};

const SECTION_RULE: &str = "------------------------------";

/// Builds the sample clinic, books and cancels appointments, and returns the
/// console output line by line.
pub fn run(registry: &AppointmentRegistryService) -> Result<Vec<String>> {
    let mut out = Vec::new();

    out.push("=== Part 3: All Health Professionals ===".to_string());

    let gp1 = GeneralPractitioner::new(101, "Dr. Sarah Johnson", true)?.into_shared();
    let gp2 = GeneralPractitioner::new(102, "Dr. Michael Lee", false)?.into_shared();
    let gp3 = GeneralPractitioner::new(103, "Dr. Emily Chen", true)?.into_shared();
    let cardio1 = Cardiologist::new(201, "Dr. David Wilson", "Interventional Cardiology")?.into_shared();
    let cardio2 = Cardiologist::new(202, "Dr. Lisa Garcia", "Electrophysiology")?.into_shared();

    let professionals: [&SharedProfessional; 5] = [&gp1, &gp2, &gp3, &cardio1, &cardio2];
    for professional in professionals {
        out.extend(professional.render_details());
    }

    out.push(SECTION_RULE.to_string());
    out.push("=== Part 5: Appointment Management ===".to_string());

    let mut appointments: Vec<Appointment> = Vec::new();

    out.push(String::new());
    out.push("--- Step 1: Create 4 Appointments ---".to_string());
    let bookings = [
        ("Alice Smith", "1234567890", "09:00", &gp1),
        ("Bob Brown", "0987654321", "11:30", &gp2),
        ("Charlie Davis", "1122334455", "14:00", &cardio1),
        ("Diana Evans", "5566789012", "16:30", &cardio2),
    ];
    for (name, mobile, slot, doctor) in bookings {
        let report = registry.create_appointment(
            Some(&mut appointments),
            name,
            mobile,
            slot,
            Some(doctor.clone()),
        );
        push_reports(&mut out, [report]);
    }

    out.push(String::new());
    out.push("--- Step 2: Print All Appointments ---".to_string());
    push_reports(&mut out, registry.list_appointments(Some(appointments.as_slice())));

    out.push(String::new());
    out.push("--- Step 3: Cancel Appointment (Mobile: 0987654321) ---".to_string());
    push_reports(
        &mut out,
        registry.cancel_by_mobile(Some(&mut appointments), Some("0987654321")),
    );

    out.push(String::new());
    out.push("--- Step 4: Print Appointments After Cancellation ---".to_string());
    push_reports(&mut out, registry.list_appointments(Some(appointments.as_slice())));

    out.push(SECTION_RULE.to_string());

    Ok(out)
}

fn push_reports(out: &mut Vec<String>, reports: impl IntoIterator<Item = RegistryReport>) {
    for report in reports {
        out.extend(report.render_lines());
    }
}
