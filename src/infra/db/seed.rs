//! Default lawyer directory inserted on first run.

use crate::domain::NewLawyer;
use anyhow::Result;
use rusqlite::Connection;

struct SeedLawyer {
    name: &'static str,
    specialty: &'static str,
    experience: &'static str,
    image: &'static str,
    bio: &'static str,
    email: &'static str,
    phone: &'static str,
}

const DEFAULT_LAWYERS: [SeedLawyer; 6] = [
    SeedLawyer {
        name: "Richard Davis",
        specialty: "Criminal Law",
        experience: "20 years",
        image: "https://randomuser.me/api/portraits/men/32.jpg",
        bio: "Richard Davis is a seasoned criminal defense attorney with over 20 years of experience defending clients in complex criminal cases.",
        email: "richard.davis@lawfirm.com",
        phone: "(555) 123-4567",
    },
    SeedLawyer {
        name: "Jane Smith",
        specialty: "Family Law",
        experience: "15 years",
        image: "https://randomuser.me/api/portraits/women/44.jpg",
        bio: "Jane Smith specializes in family law matters including divorce, custody, and adoption cases with compassionate and professional service.",
        email: "jane.smith@lawfirm.com",
        phone: "(555) 234-5678",
    },
    SeedLawyer {
        name: "Robert Brown",
        specialty: "Business Law",
        experience: "10 years",
        image: "https://randomuser.me/api/portraits/men/75.jpg",
        bio: "Robert Brown helps businesses navigate complex legal challenges with expertise in corporate law and business litigation.",
        email: "robert.brown@lawfirm.com",
        phone: "(555) 345-6789",
    },
    SeedLawyer {
        name: "Emily Johnson",
        specialty: "Immigration Law",
        experience: "12 years",
        image: "https://randomuser.me/api/portraits/women/68.jpg",
        bio: "Emily Johnson is dedicated to helping individuals and families navigate the immigration process with expertise and care.",
        email: "emily.johnson@lawfirm.com",
        phone: "(555) 456-7890",
    },
    SeedLawyer {
        name: "Michael Lee",
        specialty: "Corporate Law",
        experience: "8 years",
        image: "https://randomuser.me/api/portraits/men/20.jpg",
        bio: "Michael Lee provides comprehensive corporate legal services including mergers, acquisitions, and regulatory compliance.",
        email: "michael.lee@lawfirm.com",
        phone: "(555) 567-8901",
    },
    SeedLawyer {
        name: "Sarah Walker",
        specialty: "Real Estate Law",
        experience: "11 years",
        image: "https://randomuser.me/api/portraits/women/50.jpg",
        bio: "Sarah Walker specializes in real estate transactions, property law, and real estate litigation with proven results.",
        email: "sarah.walker@lawfirm.com",
        phone: "(555) 678-9012",
    },
];

pub fn default_lawyers() -> Vec<NewLawyer> {
    DEFAULT_LAWYERS
        .iter()
        .map(|seed| NewLawyer {
            name: seed.name.to_string(),
            specialty: seed.specialty.to_string(),
            experience: seed.experience.to_string(),
            image: seed.image.to_string(),
            bio: Some(seed.bio.to_string()),
            email: Some(seed.email.to_string()),
            phone: Some(seed.phone.to_string()),
        })
        .collect()
}

/// Insert `lawyers` if the table is empty, all in one transaction.
///
/// Returns the number of inserted rows; 0 when the directory already has
/// entries. A failing insert rolls back the whole batch.
pub fn seed_lawyers(conn: &mut Connection, lawyers: &[NewLawyer]) -> Result<usize> {
    let tx = conn.transaction()?;

    let count: i64 = tx.query_row("SELECT COUNT(*) FROM lawyers", [], |row| row.get(0))?;
    if count > 0 {
        return Ok(0);
    }

    {
        let mut stmt = tx.prepare(
            "INSERT INTO lawyers (name, specialty, experience, image, bio, email, phone) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )?;
        for lawyer in lawyers {
            stmt.execute(rusqlite::params![
                lawyer.name,
                lawyer.specialty,
                lawyer.experience,
                lawyer.image,
                lawyer.bio,
                lawyer.email,
                lawyer.phone,
            ])?;
        }
    }

    tx.commit()?;
    Ok(lawyers.len())
}
