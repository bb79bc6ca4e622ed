//! The built-in demo catalog.
//!
//! Fifty well-known movies with a two-word genre string and a one-line
//! synopsis each. Ids are assigned from the row position (1-based), so the
//! order of this table is the catalog order used for tie-breaking.

/// (title, genres, overview)
pub(crate) const BUILTIN_MOVIES: [(&str, &str, &str); 50] = [
    (
        "Inception",
        "Sci-Fi Thriller",
        "A thief who steals corporate secrets through the use of dream-sharing technology.",
    ),
    (
        "Interstellar",
        "Sci-Fi Drama",
        "A team of explorers travel through a wormhole in space.",
    ),
    (
        "The Dark Knight",
        "Action Thriller",
        "When the menace known as the Joker emerges, Batman must step up.",
    ),
    (
        "Memento",
        "Mystery Thriller",
        "A man with short-term memory loss attempts to track down his wife's murderer.",
    ),
    (
        "The Prestige",
        "Drama Mystery",
        "Two magicians engage in a competitive rivalry.",
    ),
    (
        "Titanic",
        "Romance Drama",
        "A love story set against the sinking of the Titanic.",
    ),
    (
        "Avatar",
        "Sci-Fi Adventure",
        "A paraplegic Marine is sent to Pandora on a unique mission but becomes torn between following orders and protecting an alien world.",
    ),
    (
        "The Avengers",
        "Action Adventure",
        "Earth's mightiest heroes must come together to stop Loki.",
    ),
    (
        "Iron Man",
        "Action Sci-Fi",
        "Billionaire Tony Stark becomes Iron Man after being captured in a cave.",
    ),
    (
        "Thor",
        "Fantasy Action",
        "The Norse god of thunder, Thor, is cast down to Earth.",
    ),
    (
        "Captain America: The First Avenger",
        "Action Adventure",
        "Steve Rogers becomes Captain America to fight the Nazis during World War II.",
    ),
    (
        "Guardians of the Galaxy",
        "Sci-Fi Comedy",
        "A group of intergalactic criminals must work together to save the universe.",
    ),
    (
        "Black Panther",
        "Action Sci-Fi",
        "A Wakandan prince must fight for his throne after his father's death.",
    ),
    (
        "Doctor Strange",
        "Fantasy Adventure",
        "A brilliant but arrogant surgeon learns the ways of magic.",
    ),
    (
        "Spider-Man: Homecoming",
        "Action Comedy",
        "A young Peter Parker balances high school and superhero life.",
    ),
    (
        "Wonder Woman",
        "Action Adventure",
        "An Amazon princess leaves her home to fight in the war.",
    ),
    (
        "Aquaman",
        "Fantasy Adventure",
        "The underwater kingdom of Atlantis is revealed.",
    ),
    (
        "Justice League",
        "Action Sci-Fi",
        "Superheroes unite to save Earth from an alien invasion.",
    ),
    (
        "The Flash",
        "Action Comedy",
        "A speedster superhero battles villains across time.",
    ),
    (
        "Shazam!",
        "Fantasy Adventure",
        "A young boy discovers magical powers and becomes a superhero.",
    ),
    (
        "Harry Potter and the Sorcerer's Stone",
        "Fantasy Adventure",
        "A young wizard discovers he is famous in the magical world.",
    ),
    (
        "Harry Potter and the Chamber of Secrets",
        "Fantasy Adventure",
        "Harry returns to Hogwarts and faces new challenges.",
    ),
    (
        "Harry Potter and the Prisoner of Azkaban",
        "Fantasy Adventure",
        "Harry learns about his family and faces new dangers.",
    ),
    (
        "Harry Potter and the Goblet of Fire",
        "Fantasy Adventure",
        "The Triwizard Tournament tests Harry's courage and skill.",
    ),
    (
        "Harry Potter and the Order of the Phoenix",
        "Fantasy Adventure",
        "Harry must form a secret group to battle Voldemort's forces.",
    ),
    (
        "The Lord of the Rings: The Fellowship of the Ring",
        "Fantasy Adventure",
        "A young hobbit embarks on a quest to destroy a powerful ring.",
    ),
    (
        "The Lord of the Rings: The Two Towers",
        "Fantasy Action",
        "The fellowship is divided as the battle against Sauron intensifies.",
    ),
    (
        "The Lord of the Rings: The Return of the King",
        "Fantasy Adventure",
        "The final battle for Middle-earth begins.",
    ),
    (
        "The Hobbit: An Unexpected Journey",
        "Fantasy Adventure",
        "Bilbo Baggins begins his unexpected journey.",
    ),
    (
        "The Hobbit: The Desolation of Smaug",
        "Fantasy Adventure",
        "Bilbo faces the dragon Smaug in his quest.",
    ),
    (
        "The Matrix",
        "Sci-Fi Action",
        "A computer hacker discovers the reality he lives in is a simulation.",
    ),
    (
        "The Matrix Reloaded",
        "Sci-Fi Action",
        "Neo must save Zion from the Machines.",
    ),
    (
        "The Matrix Revolutions",
        "Sci-Fi Action",
        "The final battle for the fate of humanity begins.",
    ),
    (
        "John Wick",
        "Action Thriller",
        "A retired hitman seeks vengeance for his stolen car and dead dog.",
    ),
    (
        "John Wick: Chapter 2",
        "Action Thriller",
        "John Wick returns to settle an old debt.",
    ),
    (
        "Dune",
        "Sci-Fi Adventure",
        "Paul Atreides must navigate the politics of a desert planet.",
    ),
    (
        "Blade Runner 2049",
        "Sci-Fi Thriller",
        "A young officer uncovers the secrets of replicants.",
    ),
    (
        "Star Wars: A New Hope",
        "Sci-Fi Adventure",
        "Luke Skywalker learns the ways of the Force.",
    ),
    (
        "Star Wars: The Empire Strikes Back",
        "Sci-Fi Adventure",
        "The rebels fight the Empire in a galaxy-wide war.",
    ),
    (
        "Star Wars: Return of the Jedi",
        "Sci-Fi Adventure",
        "The story of Anakin Skywalker's son unfolds.",
    ),
    (
        "The Lion King",
        "Animation Adventure",
        "A lion cub learns his place in the circle of life.",
    ),
    (
        "Frozen",
        "Animation Adventure",
        "Anna must find Elsa, whose powers have trapped their kingdom in winter.",
    ),
    (
        "Frozen II",
        "Animation Adventure",
        "Anna and Elsa embark on a new journey to discover the origin of Elsa's powers.",
    ),
    (
        "Toy Story",
        "Animation Comedy",
        "A cowboy doll deals with the arrival of a new toy.",
    ),
    (
        "Toy Story 2",
        "Animation Comedy",
        "The toys work together to save Woody from being sold.",
    ),
    (
        "Coco",
        "Animation Adventure",
        "A young boy discovers the power of his family's history.",
    ),
    (
        "Moana",
        "Animation Adventure",
        "A Polynesian girl sets sail on an epic adventure.",
    ),
    (
        "Zootopia",
        "Animation Adventure",
        "A bunny cop teams up with a fox to solve a mystery.",
    ),
    (
        "Inside Out",
        "Animation Adventure",
        "A young girl learns to embrace her emotions.",
    ),
    (
        "Finding Nemo",
        "Animation Comedy",
        "A clownfish searches for his missing son.",
    ),
];
