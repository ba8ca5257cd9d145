// ABOUTME: Advice card commands: mood, sleep, steps, hair, skin, diet, and exercise
// ABOUTME: Each prints the card's display area, either the result or its failure message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use you360::adapters::{ExerciseMode, Presentation, SkinType};
use you360::session::DashboardSession;
use you360_intelligence::{Distance, DistanceUnit};

use crate::helpers::display::{print_card, print_failure};

pub async fn mood(session: &DashboardSession, mood: &str) {
    match Presentation::from_result(session.select_mood(mood).await) {
        Presentation::Ready { data } => print_card(&format!("Mood: {}", data.mood), &data.tip),
        Presentation::Failed { message } => print_failure(&message),
    }
}

pub async fn sleep(session: &DashboardSession, hours: f64) {
    match Presentation::from_result(session.analyze_sleep(hours).await) {
        Presentation::Ready { data } => {
            let mut body = format!(
                "Deep sleep: {:.1}h\nLight sleep: {:.1}h\n",
                data.deep_hours, data.light_hours
            );
            if data.below_recommended {
                body.push_str("Below the recommended 7 hours\n");
            }
            body.push('\n');
            body.push_str(&data.analysis);
            print_card(&format!("Sleep: {:.1}h", data.hours), &body);
        }
        Presentation::Failed { message } => print_failure(&message),
    }
}

pub async fn steps(session: &DashboardSession, value: f64, unit: DistanceUnit) {
    let distance = Distance::new(value, unit);
    match Presentation::from_result(session.convert_steps(distance).await) {
        Presentation::Ready { data } => {
            let body = format!(
                "{} steps ({:.0} m)\nSteps today: {}\n\n{}",
                data.steps, data.meters, data.steps_today, data.message
            );
            print_card(&format!("Walked {value} {unit}"), &body);
        }
        Presentation::Failed { message } => print_failure(&message),
    }
}

pub async fn hair(session: &DashboardSession, issue: &str) {
    match Presentation::from_result(session.hair_advice(issue).await) {
        Presentation::Ready { data } => print_card(&data.topic, &data.advice),
        Presentation::Failed { message } => print_failure(&message),
    }
}

pub async fn skin(session: &DashboardSession, skin_type: SkinType) {
    match Presentation::from_result(session.skin_advice(skin_type).await) {
        Presentation::Ready { data } => print_card(&data.topic, &data.advice),
        Presentation::Failed { message } => print_failure(&message),
    }
}

pub async fn diet(session: &DashboardSession, food: &str) {
    match Presentation::from_result(session.estimate_sugar(food).await) {
        Presentation::Ready { data } => {
            let body = format!(
                "Estimated post-meal reading: {:.0} mg/dL\n\n{}",
                data.estimated_reading, data.advice
            );
            print_card(&data.food, &body);
        }
        Presentation::Failed { message } => print_failure(&message),
    }
}

pub async fn exercise(session: &DashboardSession, mode: ExerciseMode) {
    match Presentation::from_result(session.exercise_plan(mode).await) {
        Presentation::Ready { data } => print_card(&data.topic, &data.advice),
        Presentation::Failed { message } => print_failure(&message),
    }
}
